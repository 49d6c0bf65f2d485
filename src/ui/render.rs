use crate::coordinator::AppCoordinator;
use crate::ui::flow::FlowView;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use ratatui::widgets::Clear;
use ratatui::Frame;

pub fn draw(frame: &mut Frame<'_>, app: &AppCoordinator) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let breadcrumb = app.breadcrumb();
    frame.render_widget(Header::new(app.snapshot(), &breadcrumb).widget(), header);

    frame.render_widget(Clear, body);
    app.render(frame, body);

    let hints = app.hints();
    frame.render_widget(Footer::new(&hints).widget(footer), footer);
}

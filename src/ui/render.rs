use crate::roster::RosterApi;
use crate::ui::app::App;
use crate::ui::confirm::render_confirm_dialog;
use crate::ui::footer::Footer;
use crate::ui::form::render_form;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::table::render_table;
use crate::ui::toast::render_toasts;
use ratatui::Frame;

pub fn draw<C: RosterApi>(frame: &mut Frame<'_>, app: &App<C>) {
    let area = frame.area();
    let regions = layout_regions(area);
    let state = app.state();

    let header = Header::new(&state.session, state.roster.len(), app.endpoint());
    frame.render_widget(header.widget(), regions.header);

    render_form(frame, regions.form, &state.session, app.focus());
    render_table(
        frame,
        regions.table,
        &state.roster,
        &state.session,
        app.selection(),
        app.focus(),
    );

    let footer = Footer::new(app.focus(), state.session.is_editing());
    frame.render_widget(footer.widget(regions.footer), regions.footer);

    render_toasts(frame, &app.toasts(), area);
    render_confirm_dialog(frame, app.confirm_dialog());
}

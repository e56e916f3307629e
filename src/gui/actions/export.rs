// src/gui/actions/export.rs
use crate::{file, gui::app::App};

pub fn export(app: &mut App) {
    // normalize out_path first (mutates app) before any &app borrows
    if app.out_path_dirty {
        app.state.options.export.set_path(&app.out_path_text);
        logf!(
            "Export: Out path set → {}",
            app.state.options.export.out_path().display()
        );
        app.out_path_dirty = false;
    }

    let status_msg = {
        let Some(outcome) = &app.results else {
            logd!("Export: Clicked, but there's nothing to export");
            app.status("Nothing to export");
            return;
        };
        if outcome.view.is_empty() {
            logd!("Export: Clicked, but the result set is empty");
            s!("Nothing to export")
        } else {
            let export = &app.state.options.export;
            logf!(
                "Export: Begin rows={}, columns={}",
                outcome.view.row_count(),
                outcome.view.columns.len()
            );

            match file::write_export_single(export, &outcome.view) {
                Ok(path) => {
                    logf!("Export: OK → {}", path.display());
                    format!("Exported: {}", path.display())
                }
                Err(e) => {
                    loge!("Export: Error: {}", e);
                    format!("Export error: {e}")
                }
            }
        }
    };

    // mutate app only after the outcome borrow is gone
    app.status(status_msg);
}

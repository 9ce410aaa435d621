//! Interactive card: a menu loop over the controller's actions.

use inquire::{InquireError, Select, Text};
use std::process::ExitCode;
use suhu_core::WeatherController;

use crate::render;

const SEARCH: &str = "Cari lokasi";
const CURRENT_LOCATION: &str = "Gunakan lokasi saat ini";
const TOGGLE_UNIT: &str = "Ganti satuan suhu (°C/°F)";
const TOGGLE_THEME: &str = "Ganti tema";
const QUIT: &str = "Keluar";

const ACTIONS: [&str; 5] = [SEARCH, CURRENT_LOCATION, TOGGLE_UNIT, TOGGLE_THEME, QUIT];

pub async fn run(mut controller: WeatherController) -> anyhow::Result<ExitCode> {
    draw(&controller);

    loop {
        let action = match Select::new("Pilih aksi:", ACTIONS.to_vec()).prompt() {
            Ok(action) => action,
            Err(e) if is_cancel(&e) => break,
            Err(e) => return Err(e.into()),
        };

        match action {
            SEARCH => {
                let text = match Text::new("Nama kota:")
                    .with_placeholder("Masukkan nama kota...")
                    .with_initial_value(controller.state().search_text())
                    .prompt()
                {
                    Ok(text) => text,
                    Err(e) if is_cancel(&e) => continue,
                    Err(e) => return Err(e.into()),
                };
                controller.set_search_text(text);
                controller.search_by_name().await;
            }
            CURRENT_LOCATION => controller.use_current_location().await,
            TOGGLE_UNIT => controller.toggle_unit(),
            TOGGLE_THEME => controller.toggle_theme(),
            _ => break,
        }

        draw(&controller);
    }

    Ok(ExitCode::SUCCESS)
}

fn draw(controller: &WeatherController) {
    println!("{}", render::card(controller.state(), controller.card().as_ref()));
}

fn is_cancel(err: &InquireError) -> bool {
    matches!(err, InquireError::OperationCanceled | InquireError::OperationInterrupted)
}

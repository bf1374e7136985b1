#![allow(dead_code)]

pub mod fwicast_env;
pub mod http_stub;

use fwicast::config::AppSettings;
use fwicast::egui_app::controller::PredictorController;
use fwicast::form::FieldId;
use std::time::{Duration, Instant};

/// Values from the documented example request, in display order.
pub const EXAMPLE_VALUES: [&str; 9] = ["25", "60", "15", "0", "85.1", "26.2", "94.3", "5.1", "27.5"];

pub fn controller_for(base_url: &str) -> PredictorController {
    PredictorController::new(AppSettings {
        api_base_url: base_url.to_string(),
        check_health_on_startup: false,
    })
}

pub fn fill_example(controller: &mut PredictorController) {
    for (field, value) in FieldId::ALL.into_iter().zip(EXAMPLE_VALUES) {
        controller.update_field(field, value);
    }
}

/// Poll the controller like the renderer would until no job is outstanding.
pub fn wait_until_idle(controller: &mut PredictorController) {
    let deadline = Instant::now() + Duration::from_secs(20);
    while controller.is_busy() {
        assert!(Instant::now() < deadline, "background job did not finish");
        controller.poll_background_jobs();
        std::thread::sleep(Duration::from_millis(5));
    }
}

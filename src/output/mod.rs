pub mod formatter;

pub use formatter::{
    format_json, format_meter, format_metric, format_password, format_password_meter, format_points,
    format_report, format_strength, should_use_colors,
};

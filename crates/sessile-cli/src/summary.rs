use console::Style;
use sessile_core::params::{ContourApproximation, Heuristics, ParameterSet};

struct Styles {
    title: Style,
    header: Style,
    label: Style,
    value: Style,
    method: Style,
}

impl Styles {
    fn new() -> Self {
        Self {
            title: Style::new().cyan().bold(),
            header: Style::new().cyan().bold(),
            label: Style::new().dim(),
            value: Style::new().bold().white(),
            method: Style::new().green(),
        }
    }
}

pub fn print_parameter_summary(params: &ParameterSet, heuristics: &Heuristics) {
    let s = Styles::new();

    println!();
    println!("  {}", s.title.apply_to("Sessile Contact Angle"));
    println!("  {}", s.title.apply_to("\u{2550}".repeat(21)));
    println!();

    println!("  {}", s.header.apply_to("Edge Detection"));
    row(&s, "Clip limit", format!("{:.1}", params.clip_limit));
    row(&s, "Canny", format!("{} / {}", params.threshold1, params.threshold2));
    println!();

    println!("  {}", s.header.apply_to("Geometry"));
    row(&s, "Extremes", params.points_to_take.to_string());
    row(
        &s,
        "Band",
        format!(
            "{} < h < {} px",
            params.height_threshold_finish, params.height_threshold_start
        ),
    );
    row(&s, "Max jump", format!("{} px", params.jump_threshold));
    row(&s, "Min points", params.min_points_to_find.to_string());
    println!();

    let contours = match heuristics.contour_approximation {
        ContourApproximation::None => "every pixel",
        ContourApproximation::Simple => "run ends",
    };
    println!("  {}", s.header.apply_to("Heuristics"));
    row(&s, "Min area", format!("{:.0} px\u{b2}", heuristics.min_contour_area));
    println!("    {:<12}{}", s.label.apply_to("Contours"), s.method.apply_to(contours));
    println!();
}

fn row(s: &Styles, label: &str, value: String) {
    println!("    {:<12}{}", s.label.apply_to(label), s.value.apply_to(value));
}

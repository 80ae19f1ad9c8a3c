use paramtrace_core::SeriesStatistics;
use paramtrace_view::ViewWindow;

fn stats(max_x: f64, min_step: f64) -> SeriesStatistics {
    SeriesStatistics {
        max_x,
        min_step,
        has_range: true,
        ..SeriesStatistics::default()
    }
}

fn assert_window(window: Option<ViewWindow>, min: f64, max: f64) {
    let window = window.expect("window should be accepted");
    assert!(
        (window.min - min).abs() < 1e-9 && (window.max - max).abs() < 1e-9,
        "expected [{min}, {max}], got [{}, {}]",
        window.min,
        window.max
    );
}

#[test]
fn full_window_spans_recorded_extent() {
    let window = ViewWindow::full(&stats(250.0, 0.01));
    assert_eq!(window, ViewWindow::new(0.0, 250.0));
    assert_eq!(window.span(), 250.0);
}

#[test]
fn window_inside_bounds_is_unchanged() {
    assert_window(ViewWindow::clamp(10.0, 20.0, &stats(100.0, 0.01)), 10.0, 20.0);
}

#[test]
fn window_is_clamped_to_bounds() {
    let s = stats(100.0, 0.01);
    assert_window(ViewWindow::clamp(-10.0, 50.0, &s), 0.0, 50.0);
    assert_window(ViewWindow::clamp(60.0, 200.0, &s), 60.0, 100.0);
    assert_window(ViewWindow::clamp(-1e9, 1e9, &s), 0.0, 100.0);
}

#[test]
fn empty_or_inverted_window_is_rejected() {
    let s = stats(100.0, 0.01);
    assert_eq!(ViewWindow::clamp(50.0, 40.0, &s), None);
    assert_eq!(ViewWindow::clamp(30.0, 30.0, &s), None);
    assert_eq!(ViewWindow::clamp(150.0, 200.0, &s), None);
    assert_eq!(ViewWindow::clamp(-20.0, -10.0, &s), None);
}

#[test]
fn no_extent_rejects_everything() {
    assert_eq!(ViewWindow::clamp(0.0, 10.0, &SeriesStatistics::default()), None);
}

#[test]
fn narrow_window_widens_around_centre() {
    assert_window(
        ViewWindow::clamp(50.0, 50.001, &stats(100.0, 0.01)),
        49.9955,
        50.0055,
    );
}

#[test]
fn narrow_window_is_pinned_to_left_edge() {
    assert_window(ViewWindow::clamp(0.0, 0.002, &stats(100.0, 0.01)), 0.0, 0.01);
}

#[test]
fn narrow_window_is_pinned_to_right_edge() {
    assert_window(ViewWindow::clamp(99.999, 100.0, &stats(100.0, 0.01)), 99.99, 100.0);
}

#[test]
fn extent_below_min_step_keeps_whole_extent() {
    assert_window(ViewWindow::clamp(0.0, 0.005, &stats(0.005, 0.01)), 0.0, 0.005);
}

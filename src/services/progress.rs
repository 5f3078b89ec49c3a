use serde::Serialize;
use tracing::debug;

const MARKER_CENTER_OFFSET: f64 = 15.0;

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct ProgressView {
    pub completed: usize,
    pub total: usize,
    pub percentage: f64,
    /// Width of the progress fill, in percent of the line.
    pub fill_width: f64,
    /// Left offset of the walker icon, in pixels.
    pub marker_offset: f64,
    pub label: String,
}

/// Computes the walker state, or `None` when the page has no walker widget
/// (no container width) or there is nothing to measure against.
pub fn progress_view(
    completed: usize,
    total: usize,
    container_width: Option<f64>,
) -> Option<ProgressView> {
    let width = container_width.filter(|width| width.is_finite() && *width > 0.0)?;
    if total == 0 {
        return None;
    }

    let percentage = completed as f64 / total as f64 * 100.0;
    let fill_width = percentage.clamp(0.0, 100.0);
    let marker_offset = (width * fill_width / 100.0 - MARKER_CENTER_OFFSET).clamp(0.0, width);
    debug!("progress {percentage:.1}% ({completed}/{total})");

    Some(ProgressView {
        completed,
        total,
        percentage,
        fill_width,
        marker_offset,
        label: format!("{}%", percentage.round()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::assert_close;

    #[test]
    fn progress_view_computes_percentage_and_offset() {
        let view = progress_view(115, 1150, Some(600.0)).unwrap();

        assert_close(view.percentage, 10.0);
        assert_close(view.fill_width, 10.0);
        assert_close(view.marker_offset, 45.0);
        assert_eq!(view.label, "10%");
    }

    #[test]
    fn progress_view_rounds_label() {
        let view = progress_view(2, 3, Some(300.0)).unwrap();
        assert_eq!(view.label, "67%");
    }

    #[test]
    fn progress_view_clamps_marker_inside_container() {
        let start = progress_view(0, 100, Some(400.0)).unwrap();
        assert_eq!(start.marker_offset, 0.0);

        let overshoot = progress_view(150, 100, Some(400.0)).unwrap();
        assert_close(overshoot.percentage, 150.0);
        assert_eq!(overshoot.fill_width, 100.0);
        assert_close(overshoot.marker_offset, 385.0);
        assert!(overshoot.marker_offset <= 400.0);
    }

    #[test]
    fn progress_view_skips_missing_widget() {
        assert_eq!(progress_view(10, 100, None), None);
        assert_eq!(progress_view(10, 100, Some(0.0)), None);
    }

    #[test]
    fn progress_view_skips_zero_total() {
        assert_eq!(progress_view(0, 0, Some(500.0)), None);
    }
}

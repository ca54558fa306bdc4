//! Per-milestone progress, status and countdown for a given age

use crate::core::types::AgeDays;
use crate::milestones::milestone::{Milestone, MilestoneStatus};

/// Progress through the milestone window, 0 to 100
///
/// Both window ends are inclusive: 0 at `min`, 100 at `max`.
pub fn progress(milestone: &Milestone, age: AgeDays) -> u8 {
    if milestone.status == MilestoneStatus::Completed {
        return 100;
    }
    let window = milestone.age_window;
    if age < window.min {
        return 0;
    }
    let span = window.span();
    if span == 0 {
        return 100;
    }
    let elapsed = (age - window.min) as f64;
    let pct = (100.0 * elapsed / span as f64).round();
    pct.min(100.0) as u8
}

/// Lifecycle status of the milestone at `age`
///
/// Once the window has fully elapsed the milestone counts as completed
/// even if it was never evaluated.
pub fn status(milestone: &Milestone, age: AgeDays) -> MilestoneStatus {
    if milestone.status == MilestoneStatus::Completed {
        return MilestoneStatus::Completed;
    }
    let window = milestone.age_window;
    if window.contains(age) {
        MilestoneStatus::InProgress
    } else if age < window.min {
        MilestoneStatus::Pending
    } else {
        MilestoneStatus::Completed
    }
}

/// Whole days until the window opens, 0 once it has
pub fn days_until(milestone: &Milestone, age: AgeDays) -> AgeDays {
    milestone.age_window.min.saturating_sub(age)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::milestones::definitions::{AgeWindow, MilestoneType};

    fn curiosity() -> Milestone {
        Milestone::new(MilestoneType::CuriosityPlay)
    }

    #[test]
    fn test_midpoint_of_curiosity_play() {
        let m = curiosity();
        assert_eq!(progress(&m, 11), 50);
        assert_eq!(status(&m, 11), MilestoneStatus::InProgress);
    }

    #[test]
    fn test_progress_boundaries() {
        let m = curiosity();
        assert_eq!(progress(&m, 7), 0);
        assert_eq!(progress(&m, 8), 0);
        assert_eq!(progress(&m, 14), 100);
        assert_eq!(progress(&m, 40), 100);
    }

    #[test]
    fn test_progress_rounds_to_nearest() {
        // 1/6 of the way = 16.67%
        assert_eq!(progress(&curiosity(), 9), 17);
    }

    #[test]
    fn test_completed_short_circuits() {
        let m = curiosity().completed();
        assert_eq!(progress(&m, 2), 100);
        assert_eq!(status(&m, 2), MilestoneStatus::Completed);
    }

    #[test]
    fn test_status_auto_completes_after_window() {
        let m = curiosity();
        assert_eq!(status(&m, 7), MilestoneStatus::Pending);
        assert_eq!(status(&m, 14), MilestoneStatus::InProgress);
        assert_eq!(status(&m, 15), MilestoneStatus::Completed);
    }

    #[test]
    fn test_days_until() {
        let m = curiosity();
        assert_eq!(days_until(&m, 3), 5);
        assert_eq!(days_until(&m, 8), 0);
        assert_eq!(days_until(&m, 20), 0);
    }

    #[test]
    fn test_single_day_window() {
        let m = Milestone::with_window(MilestoneType::Imprinting, AgeWindow::new(1, 1));
        assert_eq!(progress(&m, 0), 0);
        assert_eq!(progress(&m, 1), 100);
        assert_eq!(status(&m, 1), MilestoneStatus::InProgress);
    }
}

//! Delay column presentation, shared by departures and routes.

use super::style::{Color, Style, Styled};

/// Shown instead of a delay for cancelled departures.
pub const CANCELLED_MARKER: &str = "cancelled";

/// What the delay column says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelayMark {
    OnTime,
    Late(i64),
    Early(i64),
    Cancelled,
}

impl DelayMark {
    /// Classify a delay. Cancellation overrides any reported delay.
    pub fn new(delay_minutes: i64, cancelled: bool) -> Self {
        if cancelled {
            return DelayMark::Cancelled;
        }
        match delay_minutes {
            0 => DelayMark::OnTime,
            d if d > 0 => DelayMark::Late(d),
            d => DelayMark::Early(d),
        }
    }

    /// Cell text: `+3` in red, `-1` in green, nothing when on time.
    pub fn styled(&self) -> Styled {
        match self {
            DelayMark::OnTime => Styled::plain(""),
            DelayMark::Late(d) => Styled::new(format!("+{d}"), Style::fg(Color::Red)),
            DelayMark::Early(d) => Styled::new(d.to_string(), Style::fg(Color::Green)),
            DelayMark::Cancelled => Styled::new(CANCELLED_MARKER, Style::fg(Color::Red)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sign_decides_the_mark() {
        assert_eq!(DelayMark::new(0, false), DelayMark::OnTime);
        assert_eq!(DelayMark::new(4, false), DelayMark::Late(4));
        assert_eq!(DelayMark::new(-2, false), DelayMark::Early(-2));
    }

    #[test]
    fn cancellation_wins_over_delay() {
        assert_eq!(DelayMark::new(7, true), DelayMark::Cancelled);
        assert_eq!(DelayMark::new(0, true).styled().text, CANCELLED_MARKER);
    }

    #[test]
    fn styled_text() {
        assert_eq!(DelayMark::OnTime.styled().text, "");
        assert_eq!(DelayMark::Late(3).styled(), Styled::new("+3", Style::fg(Color::Red)));
        assert_eq!(
            DelayMark::Early(-1).styled(),
            Styled::new("-1", Style::fg(Color::Green))
        );
    }
}

use std::cell::RefCell;
use std::rc::Rc;

use chrono::NaiveDateTime;
use gloo_timers::callback::Interval;
use yew::prelude::*;

use crate::config;

const MS_PER_SECOND: i64 = 1_000;
const MS_PER_MINUTE: i64 = 60 * MS_PER_SECOND;
const MS_PER_HOUR: i64 = 60 * MS_PER_MINUTE;
const MS_PER_DAY: i64 = 24 * MS_PER_HOUR;

/// What the timer shows for a given remaining-millisecond difference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CountdownDisplay {
    Running {
        days: i64,
        hours: i64,
        minutes: i64,
        seconds: i64,
    },
    Launched,
}

impl CountdownDisplay {
    /// Breaks the raw difference down directly, never through calendar
    /// units, so month or DST boundaries cannot skew the numbers.
    pub fn from_millis(diff_ms: i64) -> Self {
        if diff_ms <= 0 {
            return CountdownDisplay::Launched;
        }
        CountdownDisplay::Running {
            days: diff_ms / MS_PER_DAY,
            hours: (diff_ms / MS_PER_HOUR) % 24,
            minutes: (diff_ms / MS_PER_MINUTE) % 60,
            seconds: (diff_ms / MS_PER_SECOND) % 60,
        }
    }

    pub fn text(&self) -> String {
        match self {
            CountdownDisplay::Running {
                days,
                hours,
                minutes,
                seconds,
            } => format!("Lancement dans {}j {}h {}m {}s", days, hours, minutes, seconds),
            CountdownDisplay::Launched => "Lancement aujourd'hui !".to_string(),
        }
    }
}

fn remaining_millis(target: NaiveDateTime) -> i64 {
    let now = chrono::Local::now().naive_local();
    target.signed_duration_since(now).num_milliseconds()
}

#[function_component(Countdown)]
pub fn countdown() -> Html {
    let text = use_state(String::new);

    {
        let text = text.clone();
        use_effect_with_deps(
            move |_| {
                let target =
                    NaiveDateTime::parse_from_str(config::LAUNCH_DATE, "%Y-%m-%dT%H:%M:%S")
                        .expect("launch date is well-formed");

                let interval_handle = Rc::new(RefCell::new(None::<Interval>));

                let tick = {
                    let text = text.clone();
                    let interval_handle = interval_handle.clone();
                    move || {
                        let display = CountdownDisplay::from_millis(remaining_millis(target));
                        text.set(display.text());
                        if matches!(display, CountdownDisplay::Launched) {
                            // Terminal state, stop ticking for good.
                            interval_handle.borrow_mut().take();
                        }
                    }
                };

                *interval_handle.borrow_mut() = Some(Interval::new(1_000, tick.clone()));
                tick();

                let interval_handle = interval_handle.clone();
                move || {
                    interval_handle.borrow_mut().take();
                }
            },
            (),
        );
    }

    html! {
        <div id="countdown" class="countdown">{ (*text).clone() }</div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_stays_within_unit_ranges() {
        for diff in [1, 999, 1_000, 59_999, 3_599_999, 86_399_999, 500_000_000_000] {
            match CountdownDisplay::from_millis(diff) {
                CountdownDisplay::Running {
                    days,
                    hours,
                    minutes,
                    seconds,
                } => {
                    assert_eq!(days, diff / MS_PER_DAY);
                    assert!((0..=23).contains(&hours));
                    assert!((0..=59).contains(&minutes));
                    assert!((0..=59).contains(&seconds));
                }
                CountdownDisplay::Launched => panic!("{diff}ms should still be running"),
            }
        }
    }

    #[test]
    fn breakdown_of_a_composite_difference() {
        let diff = 3 * MS_PER_DAY + 4 * MS_PER_HOUR + 5 * MS_PER_MINUTE + 6 * MS_PER_SECOND;
        assert_eq!(
            CountdownDisplay::from_millis(diff),
            CountdownDisplay::Running {
                days: 3,
                hours: 4,
                minutes: 5,
                seconds: 6,
            }
        );
    }

    #[test]
    fn two_seconds_before_launch() {
        let target =
            NaiveDateTime::parse_from_str("2026-01-15T00:00:00", "%Y-%m-%dT%H:%M:%S").unwrap();
        let now =
            NaiveDateTime::parse_from_str("2026-01-14T23:59:58", "%Y-%m-%dT%H:%M:%S").unwrap();
        let diff = target.signed_duration_since(now).num_milliseconds();
        assert_eq!(
            CountdownDisplay::from_millis(diff).text(),
            "Lancement dans 0j 0h 0m 2s"
        );
    }

    #[test]
    fn at_and_past_the_target_the_message_is_terminal() {
        assert_eq!(CountdownDisplay::from_millis(0), CountdownDisplay::Launched);
        assert_eq!(
            CountdownDisplay::from_millis(-5_000),
            CountdownDisplay::Launched
        );
        assert_eq!(
            CountdownDisplay::from_millis(0).text(),
            "Lancement aujourd'hui !"
        );
    }
}

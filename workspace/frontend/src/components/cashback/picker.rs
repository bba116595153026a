//! Month picker and the screen state it drives.
//!
//! The picker starts at year granularity: the user picks a year, then a month
//! of that year. Nothing outside [`MonthBounds`] can be chosen, and the
//! viewed month only changes on confirm.

use common::{MonthBounds, YearMonth};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Year,
    Month { year: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct MonthPicker {
    pub bounds: MonthBounds,
    pub granularity: Granularity,
    /// Candidate month; becomes the viewed month on confirm
    pub selection: YearMonth,
}

impl MonthPicker {
    pub fn open(current: YearMonth, bounds: MonthBounds) -> Self {
        Self {
            bounds,
            granularity: Granularity::Year,
            selection: bounds.clamp(current),
        }
    }

    pub fn years(&self) -> Vec<i32> {
        self.bounds.years()
    }

    /// Selectable months of the year being browsed, empty at year granularity.
    pub fn months(&self) -> Vec<YearMonth> {
        match self.granularity {
            Granularity::Year => Vec::new(),
            Granularity::Month { year } => self.bounds.months_in(year),
        }
    }

    /// Drill into `year`. Returns false, leaving the picker untouched, when
    /// the year has no selectable month.
    pub fn select_year(&mut self, year: i32) -> bool {
        if year < self.bounds.earliest.year || year > self.bounds.latest.year {
            log::debug!("Ignoring out of range year {}", year);
            return false;
        }
        self.granularity = Granularity::Month { year };
        true
    }

    /// Pick a month of the browsed year. Returns false when no year is being
    /// browsed or the month lies outside the bounds.
    pub fn select_month(&mut self, month: u32) -> bool {
        let Granularity::Month { year } = self.granularity else {
            return false;
        };
        match YearMonth::new(year, month) {
            Some(candidate) if self.bounds.contains(candidate) => {
                self.selection = candidate;
                true
            }
            _ => {
                log::debug!("Ignoring out of range month {}-{:02}", year, month);
                false
            }
        }
    }

    /// Back to the year list.
    pub fn back_to_years(&mut self) {
        self.granularity = Granularity::Year;
    }
}

/// User input on the cashback screen.
#[derive(Debug, Clone, PartialEq)]
pub enum ScreenAction {
    OpenPicker(MonthBounds),
    SelectYear(i32),
    SelectMonth(u32),
    BackToYears,
    Confirm,
    Cancel,
}

/// The cashback screen is either showing a month or choosing a new one.
#[derive(Debug, Clone, PartialEq)]
pub enum CashbackScreenState {
    Viewing { month: YearMonth },
    PickerOpen { month: YearMonth, picker: MonthPicker },
}

impl CashbackScreenState {
    pub fn new(month: YearMonth) -> Self {
        Self::Viewing { month }
    }

    /// The month whose figures are on screen.
    pub fn month(&self) -> YearMonth {
        match self {
            Self::Viewing { month } | Self::PickerOpen { month, .. } => *month,
        }
    }

    pub fn picker(&self) -> Option<&MonthPicker> {
        match self {
            Self::PickerOpen { picker, .. } => Some(picker),
            Self::Viewing { .. } => None,
        }
    }

    pub fn is_picker_open(&self) -> bool {
        matches!(self, Self::PickerOpen { .. })
    }

    pub fn open_picker(self, bounds: MonthBounds) -> Self {
        match self {
            Self::Viewing { month } => Self::PickerOpen {
                month,
                picker: MonthPicker::open(month, bounds),
            },
            open => open,
        }
    }

    /// Apply `f` to the open picker; a no-op while viewing.
    pub fn update_picker<F>(self, f: F) -> Self
    where
        F: FnOnce(&mut MonthPicker),
    {
        match self {
            Self::PickerOpen { month, mut picker } => {
                f(&mut picker);
                Self::PickerOpen { month, picker }
            }
            viewing => viewing,
        }
    }

    /// Close the picker and view its selection.
    pub fn confirm(self) -> Self {
        match self {
            Self::PickerOpen { picker, .. } => Self::Viewing {
                month: picker.selection,
            },
            viewing => viewing,
        }
    }

    /// Close the picker and keep the month that was on screen.
    pub fn cancel(self) -> Self {
        Self::Viewing { month: self.month() }
    }

    pub fn apply(self, action: ScreenAction) -> Self {
        match action {
            ScreenAction::OpenPicker(bounds) => self.open_picker(bounds),
            ScreenAction::SelectYear(year) => self.update_picker(|p| {
                p.select_year(year);
            }),
            ScreenAction::SelectMonth(month) => self.update_picker(|p| {
                p.select_month(month);
            }),
            ScreenAction::BackToYears => self.update_picker(MonthPicker::back_to_years),
            ScreenAction::Confirm => self.confirm(),
            ScreenAction::Cancel => self.cancel(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month).unwrap()
    }

    fn bounds() -> MonthBounds {
        MonthBounds::until(NaiveDate::from_ymd_opt(2024, 6, 15).unwrap())
    }

    #[test]
    fn test_picker_starts_at_year_granularity() {
        let picker = MonthPicker::open(ym(2024, 3), bounds());

        assert_eq!(picker.granularity, Granularity::Year);
        assert_eq!(picker.selection, ym(2024, 3));
        assert_eq!(picker.years(), vec![2020, 2021, 2022, 2023, 2024]);
        assert!(picker.months().is_empty());
    }

    #[test]
    fn test_months_limited_to_bounds() {
        let mut picker = MonthPicker::open(ym(2024, 3), bounds());

        assert!(picker.select_year(2024));
        assert_eq!(picker.months().len(), 6);
        assert_eq!(picker.months().last(), Some(&ym(2024, 6)));

        assert!(picker.select_year(2020));
        assert_eq!(picker.months().first(), Some(&ym(2020, 1)));
        assert_eq!(picker.months().len(), 12);
    }

    #[test]
    fn test_out_of_range_selection_is_rejected() {
        let mut picker = MonthPicker::open(ym(2024, 3), bounds());

        assert!(!picker.select_year(2019));
        assert!(!picker.select_year(2025));
        assert_eq!(picker.granularity, Granularity::Year);

        // No year chosen yet
        assert!(!picker.select_month(1));

        picker.select_year(2024);
        assert!(!picker.select_month(7));
        assert!(!picker.select_month(13));
        assert_eq!(picker.selection, ym(2024, 3));

        assert!(picker.select_month(6));
        assert_eq!(picker.selection, ym(2024, 6));
    }

    #[test]
    fn test_back_to_years_keeps_selection() {
        let mut picker = MonthPicker::open(ym(2024, 3), bounds());
        picker.select_year(2022);
        picker.select_month(11);
        picker.back_to_years();

        assert_eq!(picker.granularity, Granularity::Year);
        assert_eq!(picker.selection, ym(2022, 11));
    }

    #[test]
    fn test_confirm_replaces_month() {
        let state = CashbackScreenState::new(ym(2024, 3))
            .open_picker(bounds())
            .update_picker(|p| {
                p.select_year(2023);
                p.select_month(8);
            });

        assert!(state.is_picker_open());
        assert_eq!(state.month(), ym(2024, 3));

        let state = state.confirm();
        assert_eq!(state, CashbackScreenState::Viewing { month: ym(2023, 8) });
    }

    #[test]
    fn test_cancel_keeps_month() {
        let state = CashbackScreenState::new(ym(2024, 3))
            .open_picker(bounds())
            .update_picker(|p| {
                p.select_year(2021);
                p.select_month(2);
            })
            .cancel();

        assert_eq!(state, CashbackScreenState::Viewing { month: ym(2024, 3) });
        assert!(state.picker().is_none());
    }

    #[test]
    fn test_confirm_without_change_keeps_month() {
        let state = CashbackScreenState::new(ym(2024, 3)).open_picker(bounds()).confirm();
        assert_eq!(state.month(), ym(2024, 3));
    }

    #[test]
    fn test_viewing_ignores_picker_actions() {
        let viewing = CashbackScreenState::new(ym(2024, 3));

        assert_eq!(viewing.clone().confirm(), viewing);
        assert_eq!(viewing.clone().update_picker(|p| p.back_to_years()), viewing);

        let open = viewing.open_picker(bounds());
        assert_eq!(open.clone().open_picker(bounds()), open);
    }

    #[test]
    fn test_actions_drive_the_screen() {
        let actions = [
            ScreenAction::OpenPicker(bounds()),
            ScreenAction::SelectYear(2019),
            ScreenAction::SelectYear(2022),
            ScreenAction::SelectMonth(5),
            ScreenAction::Confirm,
        ];
        let state = actions
            .into_iter()
            .fold(CashbackScreenState::new(ym(2024, 3)), CashbackScreenState::apply);

        assert_eq!(state, CashbackScreenState::Viewing { month: ym(2022, 5) });
    }

    #[test]
    fn test_selection_while_viewing_is_ignored() {
        let state = CashbackScreenState::new(ym(2024, 3))
            .apply(ScreenAction::SelectYear(2022))
            .apply(ScreenAction::SelectMonth(5))
            .apply(ScreenAction::Confirm);

        assert_eq!(state, CashbackScreenState::Viewing { month: ym(2024, 3) });
    }
}

//! Staff list views

use serde::{Deserialize, Serialize};
use shared::models::{StaffMember, StaffPosition, StaffStatus};

use super::{Selector, contains_ci};

/// Per-position totals for the filter dropdown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StaffPositionCounts {
    pub all: usize,
    pub manager: usize,
    pub chef: usize,
    pub waiter: usize,
    pub cashier: usize,
}

/// Employment-status totals for the page's stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct StaffStatusCounts {
    pub active: usize,
    pub inactive: usize,
    pub on_leave: usize,
}

/// Filter staff by search term and position.
///
/// Name and email match case-insensitively; the phone number matches as
/// an exact substring of the raw term (digits have no case to fold).
pub fn filter_staff<'a>(
    staff: &'a [StaffMember],
    search: &str,
    position: Selector<StaffPosition>,
) -> Vec<&'a StaffMember> {
    let term = search.to_lowercase();
    staff
        .iter()
        .filter(|member| {
            let matches_search = contains_ci(&member.name, &term)
                || contains_ci(&member.email, &term)
                || member.phone.contains(search);
            matches_search && position.matches(&member.position)
        })
        .collect()
}

/// Count staff per position over the unfiltered collection.
pub fn position_counts(staff: &[StaffMember]) -> StaffPositionCounts {
    let mut counts = StaffPositionCounts {
        all: staff.len(),
        ..StaffPositionCounts::default()
    };
    for member in staff {
        match member.position {
            StaffPosition::Manager => counts.manager += 1,
            StaffPosition::Chef => counts.chef += 1,
            StaffPosition::Waiter => counts.waiter += 1,
            StaffPosition::Cashier => counts.cashier += 1,
        }
    }
    counts
}

/// Count staff per employment status over the unfiltered collection.
pub fn status_counts(staff: &[StaffMember]) -> StaffStatusCounts {
    let mut counts = StaffStatusCounts::default();
    for member in staff {
        match member.status {
            StaffStatus::Active => counts.active += 1,
            StaffStatus::Inactive => counts.inactive += 1,
            StaffStatus::OnLeave => counts.on_leave += 1,
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    #[test]
    fn search_covers_name_email_and_phone() {
        let staff = seed::staff();
        let by_name = filter_staff(&staff, "王大厨", Selector::All);
        assert_eq!(by_name.len(), 1);

        let by_email = filter_staff(&staff, "ZHANGXIAOLI@", Selector::All);
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "张小丽");

        // A partial phone number is an exact substring match.
        let by_phone = filter_staff(&staff, "13800138004", Selector::All);
        assert_eq!(by_phone.len(), 1);
        assert_eq!(by_phone[0].name, "陈经理");

        // Every seeded phone shares this prefix.
        let by_prefix = filter_staff(&staff, "1380013800", Selector::All);
        assert_eq!(by_prefix.len(), 6);
    }

    #[test]
    fn position_filter_combines_with_search() {
        let staff = seed::staff();
        let waiters = filter_staff(&staff, "", Selector::Only(StaffPosition::Waiter));
        assert_eq!(waiters.len(), 2);

        let view = filter_staff(
            &staff,
            "restaurant.com",
            Selector::Only(StaffPosition::Chef),
        );
        assert_eq!(view.len(), 2);
        assert!(view.iter().all(|m| m.position == StaffPosition::Chef));
    }

    #[test]
    fn position_counts_partition_the_collection() {
        let staff = seed::staff();
        let counts = position_counts(&staff);
        assert_eq!(counts.all, 6);
        assert_eq!(counts.manager, 1);
        assert_eq!(counts.chef, 2);
        assert_eq!(counts.waiter, 2);
        assert_eq!(counts.cashier, 1);
        assert_eq!(
            counts.manager + counts.chef + counts.waiter + counts.cashier,
            counts.all
        );
    }

    #[test]
    fn status_counts_reflect_the_seeded_leave() {
        let staff = seed::staff();
        let counts = status_counts(&staff);
        assert_eq!(counts.active, 5);
        assert_eq!(counts.inactive, 0);
        assert_eq!(counts.on_leave, 1);
    }
}

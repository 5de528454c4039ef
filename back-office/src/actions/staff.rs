//! Staff mutation handlers

use shared::models::{StaffMember, StaffMemberCreate, StaffMemberUpdate, StaffStatus};

use crate::utils::next_record_id;

/// Id prefix for staff records
pub const STAFF_ID_PREFIX: &str = "STAFF";

/// Append a new staff member. The form collects every field except the
/// id, so nothing is defaulted here.
pub fn create_staff(staff: &[StaffMember], input: StaffMemberCreate) -> Vec<StaffMember> {
    let member = StaffMember {
        id: next_record_id(STAFF_ID_PREFIX, staff.len()),
        name: input.name,
        position: input.position,
        phone: input.phone,
        email: input.email,
        status: input.status,
        hire_date: input.hire_date,
        salary: input.salary,
    };
    let mut next = staff.to_vec();
    next.push(member);
    next
}

/// Merge `patch` over the member with `id`; unknown ids are a no-op.
pub fn update_staff(staff: &[StaffMember], id: &str, patch: &StaffMemberUpdate) -> Vec<StaffMember> {
    staff
        .iter()
        .map(|member| {
            if member.id != id {
                return member.clone();
            }
            let mut updated = member.clone();
            if let Some(name) = &patch.name {
                updated.name = name.clone();
            }
            if let Some(position) = patch.position {
                updated.position = position;
            }
            if let Some(phone) = &patch.phone {
                updated.phone = phone.clone();
            }
            if let Some(email) = &patch.email {
                updated.email = email.clone();
            }
            if let Some(status) = patch.status {
                updated.status = status;
            }
            if let Some(hire_date) = patch.hire_date {
                updated.hire_date = hire_date;
            }
            if let Some(salary) = patch.salary {
                updated.salary = salary;
            }
            updated
        })
        .collect()
}

/// Set the employment status of the member with `id`. The frontend uses
/// this for the active ⇄ onLeave toggle but any target status is valid.
pub fn set_staff_status(staff: &[StaffMember], id: &str, status: StaffStatus) -> Vec<StaffMember> {
    staff
        .iter()
        .map(|member| {
            if member.id == id {
                let mut updated = member.clone();
                updated.status = status;
                updated
            } else {
                member.clone()
            }
        })
        .collect()
}

/// Remove the member with `id`; unknown ids are a no-op.
pub fn delete_staff(staff: &[StaffMember], id: &str) -> Vec<StaffMember> {
    staff
        .iter()
        .filter(|member| member.id != id)
        .cloned()
        .collect()
}

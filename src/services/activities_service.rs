use tracing::{info, warn};

use crate::database::activity_directory::{ActivityDirectory, ActivityMap};
use crate::error::ApiError;
use crate::models::SignupConfirmation;
use crate::services::email;

pub fn list_activities(directory: &ActivityDirectory) -> ActivityMap {
    directory.snapshot()
}

/// Email syntax, then existence, duplicate and capacity. Only a call that
/// passes every step mutates the directory.
pub fn signup_for_activity(
    directory: &ActivityDirectory,
    activity_name: &str,
    email: Option<&str>,
) -> Result<SignupConfirmation, ApiError> {
    let Some(email) = email else {
        warn!(activity = %activity_name, "signup rejected: email is required");
        return Err(ApiError::MissingEmail);
    };
    if !email::is_valid_email(email) {
        warn!(activity = %activity_name, email = %email, "signup rejected: malformed email");
        return Err(ApiError::InvalidEmail {
            input: email.to_string(),
        });
    }

    match directory.add_participant(activity_name, email) {
        Ok(count) => {
            info!(activity = %activity_name, email = %email, participants = count, "signup accepted");
            Ok(SignupConfirmation::new(email, activity_name))
        }
        Err(e) => {
            warn!(activity = %activity_name, email = %email, "signup rejected: {}", e);
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_email_is_rejected_before_lookup() {
        let dir = ActivityDirectory::seeded();
        // A missing activity would be 404; syntax wins.
        assert_eq!(
            signup_for_activity(&dir, "Non-existent Club", Some("not-an-email")),
            Err(ApiError::InvalidEmail {
                input: "not-an-email".into()
            })
        );
        assert_eq!(
            signup_for_activity(&dir, "Non-existent Club", None),
            Err(ApiError::MissingEmail)
        );
    }

    #[test]
    fn successful_signup_touches_only_its_activity() {
        let dir = ActivityDirectory::seeded();
        let before = dir.snapshot();

        let c = signup_for_activity(&dir, "Chess Club", Some("new.student@mergington.edu"))
            .unwrap();
        assert_eq!(c.message, "Signed up new.student@mergington.edu for Chess Club");

        let after = list_activities(&dir);
        for (name, activity) in &after {
            if name == "Chess Club" {
                let mut expected = before[name].participants.clone();
                expected.push("new.student@mergington.edu".into());
                assert_eq!(activity.participants, expected);
            } else {
                assert_eq!(activity, &before[name]);
            }
        }
    }

    #[test]
    fn rejections_leave_state_unchanged() {
        let dir = ActivityDirectory::seeded();
        let before = dir.snapshot();

        assert_eq!(
            signup_for_activity(&dir, "Chess Club", Some("michael@mergington.edu")),
            Err(ApiError::AlreadySignedUp)
        );
        assert_eq!(
            signup_for_activity(&dir, "Non-existent Club", Some("student@mergington.edu")),
            Err(ApiError::ActivityNotFound)
        );
        assert_eq!(dir.snapshot(), before);
    }

    #[test]
    fn full_activity_rejects_one_more() {
        let dir = ActivityDirectory::seeded();
        let max = dir.get("Math Club").unwrap().max_participants;
        let mut i = 0;
        while !dir.get("Math Club").unwrap().is_full() {
            let email = format!("student{i}@mergington.edu");
            signup_for_activity(&dir, "Math Club", Some(email.as_str())).unwrap();
            i += 1;
        }

        let err = signup_for_activity(&dir, "Math Club", Some("onemore@mergington.edu"))
            .unwrap_err();
        assert!(err.to_string().contains("Activity is full"));
        assert_eq!(dir.get("Math Club").unwrap().participants.len(), max);
    }
}

//! Goal validation rules

use crate::domain::{DomainError, GoalRequest};

/// Maximum goal length, counted in characters
pub const MAX_GOAL_CHARS: usize = 500;

/// Validate a decoded goal request and return the goal text
pub fn validate_goal(request: &GoalRequest) -> Result<&str, DomainError> {
    if request.goal.is_empty() {
        return Err(DomainError::Validation("goal is required".to_string()));
    }

    let length = request.goal.chars().count();
    if length > MAX_GOAL_CHARS {
        return Err(DomainError::Validation(format!(
            "goal must be at most {} characters (got {})",
            MAX_GOAL_CHARS, length
        )));
    }

    Ok(&request.goal)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(goal: &str) -> GoalRequest {
        GoalRequest {
            goal: goal.to_string(),
        }
    }

    #[test]
    fn test_empty_goal_rejected() {
        let err = validate_goal(&request("")).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
        assert!(err.to_string().contains("required"));
    }

    #[test]
    fn test_boundary_lengths() {
        assert!(validate_goal(&request("a")).is_ok());
        assert!(validate_goal(&request(&"a".repeat(500))).is_ok());
        assert!(validate_goal(&request(&"a".repeat(501))).is_err());
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 500 multi-byte characters is still within the limit
        let goal = "é".repeat(500);
        assert!(goal.len() > MAX_GOAL_CHARS);
        assert_eq!(validate_goal(&request(&goal)).unwrap(), goal);
    }
}

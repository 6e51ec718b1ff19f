use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Grade referenced by a class ("Grade 5", "Year 9", ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradeRef {
    pub id: Uuid,
    pub name: String,
}

/// Class referenced by an assignment. The grade link is optional in the
/// store, so it stays optional here instead of being null-checked at render.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassRef {
    pub id: Uuid,
    pub name: String,
    pub academic_year: i32,
    pub grade: Option<GradeRef>,
}

/// Links a student to a class for one academic year. Many per student.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassAssignment {
    pub id: Uuid,
    pub class: Option<ClassRef>,
}

/// A student row as displayed on the roster, with its assignment history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: Uuid,
    /// School-issued identifier ("CRX-2031"), distinct from the row id.
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub class_assignments: Vec<ClassAssignment>,
}

impl StudentRecord {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Up to two uppercase initials for the avatar fallback.
    pub fn initials(&self) -> String {
        [&self.first_name, &self.last_name]
            .iter()
            .filter_map(|part| part.chars().next())
            .collect::<String>()
            .to_uppercase()
    }

    /// Label for the student's most recent class.
    ///
    /// No assignments → "Not Assigned". Otherwise the assignments are
    /// stable-sorted by academic year descending and the first is taken;
    /// a missing class or grade on that assignment yields "Unknown Class",
    /// anything else "{grade} {class}". Assignments sharing a year keep
    /// their stored order, so the earlier row wins the tie.
    pub fn current_class_label(&self) -> String {
        if self.class_assignments.is_empty() {
            return "Not Assigned".to_string();
        }

        let mut sorted: Vec<&ClassAssignment> = self.class_assignments.iter().collect();
        sorted.sort_by(|a, b| match (&a.class, &b.class) {
            (Some(left), Some(right)) => right.academic_year.cmp(&left.academic_year),
            _ => std::cmp::Ordering::Equal,
        });

        let current = sorted[0];
        match current.class.as_ref() {
            Some(class) => match class.grade.as_ref() {
                Some(grade) => format!("{} {}", grade.name, class.name),
                None => "Unknown Class".to_string(),
            },
            None => "Unknown Class".to_string(),
        }
    }

    /// Case-insensitive substring match over first name, last name and
    /// student identifier. `query` must already be lowercased.
    fn matches_lowercase(&self, query: &str) -> bool {
        self.first_name.to_lowercase().contains(query)
            || self.last_name.to_lowercase().contains(query)
            || self.student_id.to_lowercase().contains(query)
    }
}

/// Restrict a roster to rows matching the free-text query.
///
/// An empty (or whitespace-only) query returns the canonical list unchanged,
/// same elements in the same order. Otherwise the query matches as typed,
/// whitespace included, so "a " only hits names containing that exact
/// sequence. Recomputed in full on every call; the roster is memory-resident
/// so no index is kept.
pub fn filter_roster(roster: &[StudentRecord], query: &str) -> Vec<StudentRecord> {
    if query.trim().is_empty() {
        return roster.to_vec();
    }
    let query = query.to_lowercase();
    roster
        .iter()
        .filter(|student| student.matches_lowercase(&query))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn assignment(year: i32, class: &str, grade: Option<&str>) -> ClassAssignment {
        ClassAssignment {
            id: Uuid::new_v4(),
            class: Some(ClassRef {
                id: Uuid::new_v4(),
                name: class.to_string(),
                academic_year: year,
                grade: grade.map(|name| GradeRef {
                    id: Uuid::new_v4(),
                    name: name.to_string(),
                }),
            }),
        }
    }

    fn student(first: &str, last: &str, sid: &str, assignments: Vec<ClassAssignment>) -> StudentRecord {
        StudentRecord {
            id: Uuid::new_v4(),
            student_id: sid.to_string(),
            first_name: first.to_string(),
            last_name: last.to_string(),
            gender: "female".to_string(),
            profile_image_url: None,
            created_at: Utc::now(),
            class_assignments: assignments,
        }
    }

    fn sample_roster() -> Vec<StudentRecord> {
        vec![
            student("Amara", "Bello", "CRX-1001", vec![]),
            student("Ben", "Carver", "CRX-1002", vec![]),
            student("Chioma", "Adeyemi", "CRX-2001", vec![]),
        ]
    }

    #[test]
    fn empty_query_returns_canonical_list_in_order() {
        let roster = sample_roster();
        assert_eq!(filter_roster(&roster, ""), roster);
        assert_eq!(filter_roster(&roster, "   "), roster);
    }

    #[test]
    fn query_matches_first_last_or_student_id_case_insensitively() {
        let roster = sample_roster();

        let by_first = filter_roster(&roster, "AMARA");
        assert_eq!(by_first.len(), 1);
        assert_eq!(by_first[0].first_name, "Amara");

        let by_last = filter_roster(&roster, "carver");
        assert_eq!(by_last.len(), 1);
        assert_eq!(by_last[0].last_name, "Carver");

        let by_id = filter_roster(&roster, "crx-2001");
        assert_eq!(by_id.len(), 1);
        assert_eq!(by_id[0].student_id, "CRX-2001");
    }

    #[test]
    fn query_whitespace_is_matched_literally() {
        let roster = sample_roster();
        // Trailing space is part of the query, not stripped before matching.
        assert_eq!(filter_roster(&roster, "amara "), vec![]);
        assert_eq!(filter_roster(&roster, "amara").len(), 1);
    }

    #[test]
    fn filtered_list_is_subset_of_canonical() {
        let roster = sample_roster();
        let filtered = filter_roster(&roster, "crx");
        assert!(filtered.iter().all(|s| roster.contains(s)));
        assert_eq!(filter_roster(&roster, "zzz"), vec![]);
    }

    #[test]
    fn no_assignments_label_is_not_assigned() {
        let s = student("Dana", "Eze", "CRX-1003", vec![]);
        assert_eq!(s.current_class_label(), "Not Assigned");
    }

    #[test]
    fn most_recent_academic_year_wins() {
        let s = student(
            "Ed",
            "Frost",
            "CRX-1004",
            vec![
                assignment(2022, "A", Some("Grade 4")),
                assignment(2023, "B", Some("Grade 5")),
            ],
        );
        assert_eq!(s.current_class_label(), "Grade 5 B");
    }

    #[test]
    fn missing_grade_on_current_class_yields_unknown() {
        let s = student(
            "Femi",
            "Gray",
            "CRX-1005",
            vec![assignment(2024, "C", None), assignment(2021, "A", Some("Grade 2"))],
        );
        assert_eq!(s.current_class_label(), "Unknown Class");
    }

    #[test]
    fn missing_class_on_assignment_yields_unknown() {
        let dangling = ClassAssignment {
            id: Uuid::new_v4(),
            class: None,
        };
        let s = student("Gia", "Hart", "CRX-1006", vec![dangling]);
        assert_eq!(s.current_class_label(), "Unknown Class");
    }

    #[test]
    fn equal_years_keep_stored_order() {
        // Tie-breaking is stable-sort-dependent: first stored row wins.
        let s = student(
            "Hana",
            "Ito",
            "CRX-1007",
            vec![
                assignment(2023, "Maple", Some("Grade 6")),
                assignment(2023, "Oak", Some("Grade 6")),
            ],
        );
        assert_eq!(s.current_class_label(), "Grade 6 Maple");
    }

    #[test]
    fn initials_take_first_letter_of_each_name() {
        let s = student("amara", "bello", "CRX-1", vec![]);
        assert_eq!(s.initials(), "AB");
    }
}

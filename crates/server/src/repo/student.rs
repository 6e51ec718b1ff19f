use chrono::{DateTime, Utc};
use shared_types::{
    AppError, ClassAssignment, ClassRef, CreateStudentRequest, GradeRef, StudentRecord,
};
use sqlx::{Pool, Postgres};
use uuid::Uuid;

use crate::error_convert::SqlxErrorExt;

/// One row of the roster join: a student repeated once per class assignment,
/// with assignment/class/grade columns null where the LEFT JOINs found
/// nothing.
#[derive(Debug, sqlx::FromRow)]
pub struct StudentJoinRow {
    pub id: Uuid,
    pub student_id: String,
    pub first_name: String,
    pub last_name: String,
    pub gender: String,
    pub profile_image_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub assignment_id: Option<Uuid>,
    pub class_id: Option<Uuid>,
    pub class_name: Option<String>,
    pub academic_year: Option<i32>,
    pub grade_id: Option<Uuid>,
    pub grade_name: Option<String>,
}

/// The single roster read: every student joined through assignments to
/// classes and grades, ordered by last name ascending. The secondary sort
/// keys only keep a student's rows adjacent for grouping.
const ROSTER_QUERY: &str = r#"
SELECT
    s.id, s.student_id, s.first_name, s.last_name, s.gender,
    s.profile_image_url, s.created_at,
    sc.id AS assignment_id,
    c.id AS class_id, c.name AS class_name, c.academic_year,
    g.id AS grade_id, g.name AS grade_name
FROM students s
LEFT JOIN student_classes sc ON sc.student_id = s.id
LEFT JOIN classes c ON c.id = sc.class_id
LEFT JOIN grades g ON g.id = c.grade_id
ORDER BY s.last_name ASC, s.id, sc.id
"#;

/// Group flat join rows into nested student records, preserving row order.
///
/// Rows for one student must be adjacent (guaranteed by the query's ORDER
/// BY). A null assignment id means the student has no assignments at all,
/// not a dangling link, so nothing is pushed for it.
pub fn assemble_roster(rows: Vec<StudentJoinRow>) -> Vec<StudentRecord> {
    let mut roster: Vec<StudentRecord> = Vec::new();

    for row in rows {
        let StudentJoinRow {
            id,
            student_id,
            first_name,
            last_name,
            gender,
            profile_image_url,
            created_at,
            assignment_id,
            class_id,
            class_name,
            academic_year,
            grade_id,
            grade_name,
        } = row;

        if roster.last().map(|s| s.id) != Some(id) {
            roster.push(StudentRecord {
                id,
                student_id,
                first_name,
                last_name,
                gender,
                profile_image_url,
                created_at,
                class_assignments: Vec::new(),
            });
        }

        if let Some(assignment_id) = assignment_id {
            let grade = match (grade_id, grade_name) {
                (Some(id), Some(name)) => Some(GradeRef { id, name }),
                _ => None,
            };
            let class = match (class_id, class_name, academic_year) {
                (Some(id), Some(name), Some(academic_year)) => Some(ClassRef {
                    id,
                    name,
                    academic_year,
                    grade,
                }),
                _ => None,
            };
            if let Some(current) = roster.last_mut() {
                current
                    .class_assignments
                    .push(ClassAssignment {
                        id: assignment_id,
                        class,
                    });
            }
        }
    }

    roster
}

/// Fetch the full roster with assignment history.
pub async fn list_with_assignments(
    pool: &Pool<Postgres>,
) -> Result<Vec<StudentRecord>, AppError> {
    let rows = sqlx::query_as::<_, StudentJoinRow>(ROSTER_QUERY)
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(assemble_roster(rows))
}

/// Fetch one student with assignment history.
pub async fn find_by_id(
    pool: &Pool<Postgres>,
    id: Uuid,
) -> Result<Option<StudentRecord>, AppError> {
    let query = r#"
SELECT
    s.id, s.student_id, s.first_name, s.last_name, s.gender,
    s.profile_image_url, s.created_at,
    sc.id AS assignment_id,
    c.id AS class_id, c.name AS class_name, c.academic_year,
    g.id AS grade_id, g.name AS grade_name
FROM students s
LEFT JOIN student_classes sc ON sc.student_id = s.id
LEFT JOIN classes c ON c.id = sc.class_id
LEFT JOIN grades g ON g.id = c.grade_id
WHERE s.id = $1
ORDER BY sc.id
"#;

    let rows = sqlx::query_as::<_, StudentJoinRow>(query)
        .bind(id)
        .fetch_all(pool)
        .await
        .map_err(SqlxErrorExt::into_app_error)?;

    Ok(assemble_roster(rows).into_iter().next())
}

#[derive(Debug, sqlx::FromRow)]
struct StudentRow {
    id: Uuid,
    student_id: String,
    first_name: String,
    last_name: String,
    gender: String,
    profile_image_url: Option<String>,
    created_at: DateTime<Utc>,
}

/// Insert a new student row. Returns the created record (no assignments yet).
pub async fn create(
    pool: &Pool<Postgres>,
    req: CreateStudentRequest,
) -> Result<StudentRecord, AppError> {
    let row = sqlx::query_as::<_, StudentRow>(
        r#"
INSERT INTO students (student_id, first_name, last_name, gender, profile_image_url)
VALUES ($1, $2, $3, $4, $5)
RETURNING id, student_id, first_name, last_name, gender, profile_image_url, created_at
"#,
    )
    .bind(req.student_id)
    .bind(req.first_name)
    .bind(req.last_name)
    .bind(req.gender)
    .bind(req.profile_image_url)
    .fetch_one(pool)
    .await
    .map_err(SqlxErrorExt::into_app_error)?;

    Ok(StudentRecord {
        id: row.id,
        student_id: row.student_id,
        first_name: row.first_name,
        last_name: row.last_name,
        gender: row.gender,
        profile_image_url: row.profile_image_url,
        created_at: row.created_at,
        class_assignments: Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn base_row(id: Uuid, last_name: &str, sid: &str) -> StudentJoinRow {
        StudentJoinRow {
            id,
            student_id: sid.to_string(),
            first_name: "Test".to_string(),
            last_name: last_name.to_string(),
            gender: "male".to_string(),
            profile_image_url: None,
            created_at: Utc::now(),
            assignment_id: None,
            class_id: None,
            class_name: None,
            academic_year: None,
            grade_id: None,
            grade_name: None,
        }
    }

    #[test]
    fn students_without_assignments_get_empty_history() {
        let id = Uuid::new_v4();
        let roster = assemble_roster(vec![base_row(id, "Adams", "CRX-1")]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].class_assignments, vec![]);
    }

    #[test]
    fn adjacent_rows_group_into_one_student() {
        let id = Uuid::new_v4();
        let mut first = base_row(id, "Baker", "CRX-2");
        first.assignment_id = Some(Uuid::new_v4());
        first.class_id = Some(Uuid::new_v4());
        first.class_name = Some("Maple".to_string());
        first.academic_year = Some(2023);
        first.grade_id = Some(Uuid::new_v4());
        first.grade_name = Some("Grade 3".to_string());

        let mut second = base_row(id, "Baker", "CRX-2");
        second.assignment_id = Some(Uuid::new_v4());
        second.class_id = Some(Uuid::new_v4());
        second.class_name = Some("Oak".to_string());
        second.academic_year = Some(2024);

        let roster = assemble_roster(vec![first, second]);
        assert_eq!(roster.len(), 1);
        assert_eq!(roster[0].class_assignments.len(), 2);
        // Second assignment's class has no grade columns → grade is None.
        let oak = &roster[0].class_assignments[1];
        assert_eq!(oak.class.as_ref().unwrap().name, "Oak");
        assert_eq!(oak.class.as_ref().unwrap().grade, None);
    }

    #[test]
    fn row_order_is_preserved_across_students() {
        let a = Uuid::new_v4();
        let b = Uuid::new_v4();
        let roster = assemble_roster(vec![
            base_row(a, "Abbott", "CRX-3"),
            base_row(b, "Zhou", "CRX-4"),
        ]);
        let names: Vec<&str> = roster.iter().map(|s| s.last_name.as_str()).collect();
        assert_eq!(names, vec!["Abbott", "Zhou"]);
    }

    #[test]
    fn dangling_assignment_keeps_assignment_with_no_class() {
        let id = Uuid::new_v4();
        let mut row = base_row(id, "Chen", "CRX-5");
        row.assignment_id = Some(Uuid::new_v4());
        // class columns all null: the link row exists but the class is gone

        let roster = assemble_roster(vec![row]);
        assert_eq!(roster[0].class_assignments.len(), 1);
        assert_eq!(roster[0].class_assignments[0].class, None);
        assert_eq!(roster[0].current_class_label(), "Unknown Class");
    }
}

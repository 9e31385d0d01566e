//! The course catalog.
//!
//! Owns every [`Course`] and, transitively, every [`Subject`], along with
//! the identifier sequences for both. All writes go through here so the
//! uniqueness rules hold; reads are linear scans in insertion order.

use crate::error::CatalogError;
use crate::ids::IdSequence;
use crate::model::{Course, Subject};

/// The owned collection of courses and their subjects.
#[derive(Debug)]
pub struct Catalog {
    courses: Vec<Course>,
    course_ids: IdSequence,
    subject_ids: IdSequence,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            courses: Vec::new(),
            course_ids: IdSequence::new("COU", 100),
            subject_ids: IdSequence::new("SUB", 10000),
        }
    }

    /// Add a course with an empty subject list.
    ///
    /// Fails with [`CatalogError::DuplicateCourse`] when a course with the
    /// same name already exists, compared case-insensitively.
    pub fn add_course(&mut self, name: &str) -> Result<&Course, CatalogError> {
        if self
            .courses
            .iter()
            .any(|c| c.name.eq_ignore_ascii_case(name))
        {
            return Err(CatalogError::DuplicateCourse(name.to_string()));
        }
        let course = Course {
            id: self.course_ids.next_id(),
            name: name.to_string(),
            subjects: Vec::new(),
        };
        tracing::debug!(course_id = %course.id, name = %course.name, "course added");
        let index = self.courses.len();
        self.courses.push(course);
        Ok(&self.courses[index])
    }

    /// Add a subject to a course, allocating its identifier.
    ///
    /// Fails with [`CatalogError::DuplicateSubject`] when the course already
    /// has a subject with the same name, compared case-insensitively.
    pub fn add_subject(&mut self, course_id: &str, name: &str) -> Result<&Subject, CatalogError> {
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| CatalogError::CourseNotFound(course_id.to_string()))?;
        if course.subject_named(name).is_some() {
            return Err(CatalogError::DuplicateSubject {
                subject: name.to_string(),
                course: course.name.clone(),
            });
        }
        let subject = Subject {
            id: self.subject_ids.next_id(),
            name: name.to_string(),
        };
        tracing::debug!(subject_id = %subject.id, course_id, name, "subject added");
        let index = course.subjects.len();
        course.subjects.push(subject);
        Ok(&course.subjects[index])
    }

    /// Remove a subject from a course by identifier, returning it.
    ///
    /// The subject list is left unchanged when no subject matches.
    pub fn remove_subject(
        &mut self,
        course_id: &str,
        subject_id: &str,
    ) -> Result<Subject, CatalogError> {
        let course = self
            .courses
            .iter_mut()
            .find(|c| c.id == course_id)
            .ok_or_else(|| CatalogError::CourseNotFound(course_id.to_string()))?;
        course
            .remove_subject(subject_id)
            .ok_or_else(|| CatalogError::SubjectNotFound {
                subject_id: subject_id.to_string(),
                course: course.name.clone(),
            })
    }

    /// All courses in insertion order.
    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Lookup a course by identifier.
    pub fn course(&self, course_id: &str) -> Option<&Course> {
        self.courses.iter().find(|c| c.id == course_id)
    }

    /// Resolve a subject name by scanning all courses.
    pub fn subject_name(&self, subject_id: &str) -> Option<&str> {
        self.courses
            .iter()
            .flat_map(|c| c.subjects.iter())
            .find(|s| s.id == subject_id)
            .map(|s| s.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_course_allocates_sequential_ids() {
        let mut catalog = Catalog::new();
        let id1 = catalog.add_course("Math").unwrap().id.clone();
        let id2 = catalog.add_course("Physics").unwrap().id.clone();
        assert_eq!(id1, "COU100");
        assert_eq!(id2, "COU101");
    }

    #[test]
    fn duplicate_course_name_is_rejected_case_insensitively() {
        let mut catalog = Catalog::new();
        catalog.add_course("Math").unwrap();
        let err = catalog.add_course("math").unwrap_err();
        assert_eq!(err, CatalogError::DuplicateCourse("math".into()));
        assert_eq!(catalog.courses().len(), 1);
    }

    #[test]
    fn subjects_keep_insertion_order() {
        let mut catalog = Catalog::new();
        let course_id = catalog.add_course("Java Programming").unwrap().id.clone();
        catalog.add_subject(&course_id, "Core Java").unwrap();
        catalog.add_subject(&course_id, "Advanced Java").unwrap();
        let names: Vec<_> = catalog
            .course(&course_id)
            .unwrap()
            .subjects()
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(names, ["Core Java", "Advanced Java"]);
    }

    #[test]
    fn duplicate_subject_within_course_is_rejected() {
        let mut catalog = Catalog::new();
        let course_id = catalog.add_course("Java Programming").unwrap().id.clone();
        catalog.add_subject(&course_id, "Core Java").unwrap();
        let err = catalog.add_subject(&course_id, "CORE JAVA").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateSubject { .. }));
        assert_eq!(catalog.course(&course_id).unwrap().subjects().len(), 1);
    }

    #[test]
    fn same_subject_name_allowed_in_different_courses() {
        let mut catalog = Catalog::new();
        let a = catalog.add_course("Course A").unwrap().id.clone();
        let b = catalog.add_course("Course B").unwrap().id.clone();
        catalog.add_subject(&a, "Intro").unwrap();
        assert!(catalog.add_subject(&b, "Intro").is_ok());
    }

    #[test]
    fn remove_subject_takes_first_id_match() {
        let mut catalog = Catalog::new();
        let course_id = catalog.add_course("Java Programming").unwrap().id.clone();
        let subject_id = catalog
            .add_subject(&course_id, "Core Java")
            .unwrap()
            .id
            .clone();
        catalog.add_subject(&course_id, "Advanced Java").unwrap();

        let removed = catalog.remove_subject(&course_id, &subject_id).unwrap();
        assert_eq!(removed.name, "Core Java");
        assert_eq!(catalog.course(&course_id).unwrap().subjects().len(), 1);
    }

    #[test]
    fn remove_missing_subject_leaves_list_unchanged() {
        let mut catalog = Catalog::new();
        let course_id = catalog.add_course("Java Programming").unwrap().id.clone();
        catalog.add_subject(&course_id, "Core Java").unwrap();

        let err = catalog.remove_subject(&course_id, "SUB99999").unwrap_err();
        assert!(matches!(err, CatalogError::SubjectNotFound { .. }));
        assert_eq!(catalog.course(&course_id).unwrap().subjects().len(), 1);
    }

    #[test]
    fn subject_name_scans_all_courses() {
        let mut catalog = Catalog::new();
        let a = catalog.add_course("Course A").unwrap().id.clone();
        let b = catalog.add_course("Course B").unwrap().id.clone();
        catalog.add_subject(&a, "Intro").unwrap();
        let wanted = catalog.add_subject(&b, "Outro").unwrap().id.clone();

        assert_eq!(catalog.subject_name(&wanted), Some("Outro"));
        assert_eq!(catalog.subject_name("SUB99999"), None);
    }
}

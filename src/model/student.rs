#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Fields for a student that has not been stored yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStudent {
    pub name: String,
    pub email: String,
}

impl NewStudent {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
        }
    }
}

/// Partial update of a student. Only fields that are `Some` are written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StudentPatch {
    pub name: Option<String>,
    pub email: Option<String>,
}

impl StudentPatch {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none()
    }

    pub fn apply(self, student: &mut Student) {
        if let Some(name) = self.name {
            student.name = name;
        }
        if let Some(email) = self.email {
            student.email = email;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> Student {
        Student {
            id: 1,
            name: "Alice".to_string(),
            email: "a@x.com".to_string(),
        }
    }

    #[test]
    fn test_patch_applies_only_present_fields() {
        let mut student = alice();
        StudentPatch::default()
            .with_email("alice@school.edu")
            .apply(&mut student);

        assert_eq!(student.name, "Alice");
        assert_eq!(student.email, "alice@school.edu");
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let patch = StudentPatch::default();
        assert!(patch.is_empty());

        let mut student = alice();
        patch.apply(&mut student);
        assert_eq!(student, alice());
    }
}

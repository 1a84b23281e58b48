use std::fmt;

/// Holds student data and nothing else; logging, storage and the like belong elsewhere.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub name: String,
    pub grade_level: i32,
}

impl Student {
    pub fn new(name: impl Into<String>, grade_level: i32) -> Self {
        Self {
            name: name.into(),
            grade_level,
        }
    }
}

impl fmt::Display for Student {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (grade {})", self.name, self.grade_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_is_field_equality() {
        assert_eq!(Student::new("Ali", 10), Student::new("Ali", 10));
        assert_ne!(Student::new("Ali", 10), Student::new("Ali", 11));
    }

    #[test]
    fn test_fields_are_mutable() {
        let mut student = Student::new("Ali", 10);
        student.grade_level += 1;
        student.name.push_str(" Yilmaz");
        assert_eq!(student.to_string(), "Ali Yilmaz (grade 11)");
    }
}

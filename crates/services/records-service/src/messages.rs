//! Client-facing messages raised by the use cases.

pub const EMAIL_TAKEN: &str = "Email already exists";
pub const USER_NOT_FOUND: &str = "User not found";
pub const USER_NOT_AUTHENTICATED: &str = "User not authenticated";
pub const FAILED_TO_SAVE_USER: &str = "Failed to save user";

pub const STUDENT_NOT_FOUND: &str = "Student not found";
pub const FAILED_TO_SAVE_STUDENT: &str = "Failed to save student";

pub const COURSE_NOT_FOUND: &str = "Curso no encontrado";

pub const ENROLLMENT_NOT_FOUND: &str = "Inscripción no encontrada";
pub const ALREADY_ENROLLED: &str = "El estudiante ya está inscrito en este curso";
pub const ENROLLMENT_STUDENT_MISSING: &str = "El estudiante no existe";
pub const ENROLLMENT_COURSE_MISSING: &str = "El curso no existe";

pub const TOKEN_MISSING: &str = "Token no proporcionado";
pub const TOKEN_INVALID: &str = "Token inválido";
pub const TOKEN_EXPIRED: &str = "Token expirado";

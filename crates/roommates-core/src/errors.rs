use thiserror::Error;

/// Result type alias using RmError
pub type Result<T> = std::result::Result<T, RmError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that callers and tests can match
/// on without parsing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    // Input
    /// Caller-supplied configuration or arguments are unusable
    InvalidInput,

    // Store
    /// The store could not be reached or the connection could not be opened
    Connection,
    /// A store-side constraint (NOT NULL, FOREIGN KEY, UNIQUE, CHECK) rejected a write
    ConstraintViolation,
    /// A non-nullable field was read from a NULL column
    NullProjection,
    /// Any other failure reported by the store
    Persistence,
}

impl ErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ErrorKind::Connection => "ERR_CONNECTION",
            ErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ErrorKind::NullProjection => "ERR_NULL_PROJECTION",
            ErrorKind::Persistence => "ERR_PERSISTENCE",
        }
    }
}

/// Canonical structured error type
///
/// Carries a classification for programmatic handling plus the operation
/// and entity context needed to debug a failed call.
#[derive(Debug, Clone)]
pub struct RmError {
    kind: ErrorKind,
    op: Option<String>,
    entity_id: Option<String>,
    message: String,
}

impl RmError {
    /// Create a new error with the specified kind
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            op: None,
            entity_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add entity ID context
    pub fn with_entity_id(mut self, id: impl ToString) -> Self {
        self.entity_id = Some(id.to_string());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the entity ID context, if any
    pub fn entity_id(&self) -> Option<&str> {
        self.entity_id.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for RmError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(entity_id) = &self.entity_id {
            write!(f, " (entity_id: {})", entity_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for RmError {}

// ========== End Error Facility ==========

/// Typed failures raised while mapping store rows into domain records
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RoommatesError {
    /// Roommate points at a room id that the join could not resolve
    #[error("Roommate {roommate_id} references room {room_id}, which does not exist")]
    DanglingRoom { roommate_id: i32, room_id: i32 },

    /// An insert completed but the store did not hand back the new identity
    #[error("Insert into {table} did not return a generated id")]
    IdentityNotReturned { table: String },
}

impl From<RoommatesError> for RmError {
    fn from(err: RoommatesError) -> Self {
        let message = err.to_string();
        match err {
            RoommatesError::DanglingRoom { roommate_id, .. } => {
                RmError::new(ErrorKind::NullProjection)
                    .with_entity_id(roommate_id)
                    .with_op("map_roommate")
                    .with_message(message)
            }

            RoommatesError::IdentityNotReturned { .. } => {
                RmError::new(ErrorKind::Persistence).with_message(message)
            }
        }
    }
}

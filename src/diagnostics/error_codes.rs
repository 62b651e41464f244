//! Error code definitions and documentation

/// Generic-type nullability errors (E1xxx)
pub mod nullability {
    /// A nullable type argument was supplied for a type parameter whose
    /// upper bound does not permit nullable.
    pub const TYPE_PARAMETER_CANNOT_BE_NULLABLE: &str = "E1001";
    /// An assignment or return where the two sides disagree on which
    /// type-argument positions are nullable.
    pub const ASSIGN_GENERIC_NULLABLE: &str = "E1002";
}

/// Internal diagnostics (I9xxx): hardening reports, never user bugs
pub mod internal {
    /// The recursion guard for nested type arguments tripped; the current
    /// check was abandoned.
    pub const NESTING_DEPTH_EXCEEDED: &str = "I9001";
}

//! Error code texts of the XML web publishing engine

/// Readable text for a server error code
///
/// Codes outside the table yield `"Unknown error"`.
pub fn error_text(code: i64) -> &'static str {
    match code {
        0 => "No error",
        1 => "User canceled action",
        2 => "Memory error",
        3 => "Command is unavailable",
        4 => "Command is unknown",
        5 => "Command is invalid",
        6 => "File is read-only",
        7 => "Running out of memory",
        8 => "Empty result",
        9 => "Insufficient privileges",
        10 => "Requested data is missing",
        11 => "Name is not valid",
        12 => "Name already exists",
        13 => "File or object is in use",
        14 => "Out of range",
        15 => "Cannot divide by zero",
        16 => "Operation failed, request retry",
        17 => "Attempt to convert foreign character set to UTF-16 failed",
        18 => "Client must provide account information to proceed",
        19 => "String contains characters other than A-Z, a-z, 0-9 (ASCII)",
        20 => "Command or operation canceled by triggered script",
        100 => "File is missing",
        101 => "Record is missing",
        102 => "Field is missing",
        103 => "Relationship is missing",
        104 => "Script is missing",
        105 => "Layout is missing",
        106 => "Table is missing",
        107 => "Index is missing",
        108 => "Value list is missing",
        109 => "Privilege set is missing",
        110 => "Related tables are missing",
        111 => "Field repetition is invalid",
        112 => "Window is missing",
        113 => "Function is missing",
        114 => "File reference is missing",
        130 => "Files are damaged or missing and must be reinstalled",
        200 => "Record access is denied",
        201 => "Field cannot be modified",
        202 => "Field access is denied",
        203 => "No records in file to print, or password doesn't allow print access",
        204 => "No access to field(s) in sort order",
        205 => "User does not have access privileges to create new records",
        206 => "User does not have password change privileges",
        207 => "User does not have sufficient privileges to change database schema",
        208 => "Password does not contain enough characters",
        209 => "New password must be different from existing one",
        210 => "User account is inactive",
        211 => "Password has expired",
        212 => "Invalid user account and/or password",
        213 => "User account and/or password does not exist",
        214 => "Too many login attempts",
        215 => "Administrator privileges cannot be duplicated",
        216 => "Guest account cannot be duplicated",
        217 => "User does not have sufficient privileges to modify administrator account",
        300 => "File is locked or in use",
        301 => "Record is in use by another user",
        302 => "Table is in use by another user",
        303 => "Database schema is in use by another user",
        304 => "Layout is in use by another user",
        306 => "Record modification ID does not match",
        400 => "Find criteria are empty",
        401 => "No records match the request",
        402 => "Selected field is not a match field for a lookup",
        403 => "Exceeding maximum record limit for trial version",
        404 => "Sort order is invalid",
        405 => "Number of records specified exceeds number of records that can be omitted",
        406 => "Replace/Reserialize criteria are invalid",
        407 => "One or both match fields are missing (invalid relationship)",
        408 => "Specified field has inappropriate data type for this operation",
        409 => "Import order is invalid",
        410 => "Export order is invalid",
        412 => "Wrong version of FileMaker used to recover file",
        413 => "Specified field has inappropriate field type",
        414 => "Layout cannot display the result",
        415 => "One or more required related records are not available",
        416 => "Primary key required from data source table",
        417 => "Database is not a supported data source",
        500 => "Date value does not meet validation entry options",
        501 => "Time value does not meet validation entry options",
        502 => "Number value does not meet validation entry options",
        503 => "Value in field is not within the range specified in validation entry options",
        504 => "Value in field is not unique as required in validation entry options",
        505 => "Value in field is not an existing value in the database file as required in validation entry options",
        506 => "Value in field is not listed on the value list specified in validation entry option",
        507 => "Value in field failed calculation test of validation entry option",
        508 => "Invalid value entered in Find mode",
        509 => "Field requires a valid value",
        510 => "Related value is empty or unavailable",
        511 => "Value in field exceeds maximum number of allowed characters",
        512 => "Record was already modified by another user",
        513 => "Record must have a value in some field to be created",
        800 => "Unable to create file on disk",
        801 => "Unable to create temporary file on System disk",
        802 => "Unable to open file",
        803 => "File is single user or host cannot be found",
        804 => "File cannot be opened as read-only in its current state",
        805 => "File is damaged; use Recover command",
        806 => "File cannot be opened with this version of FileMaker",
        807 => "File is not a FileMaker file or is severely damaged",
        808 => "Cannot open file because access privileges are damaged",
        809 => "Disk/volume is full",
        810 => "Disk/volume is locked",
        811 => "Temporary file cannot be opened as FileMaker file",
        813 => "Record synchronization error on network",
        814 => "File(s) cannot be opened because maximum number is open",
        815 => "Couldn't open lookup file",
        816 => "Unable to convert file",
        817 => "Unable to open file because it does not belong to this solution",
        819 => "Cannot save a local copy of a remote file",
        820 => "File is in the process of being closed",
        821 => "Host forced a disconnect",
        822 => "FMI files not found; reinstall missing files",
        823 => "Cannot set file to single-user, guests are connected",
        824 => "File is damaged or not a FileMaker file",
        950 => "Adding repeating related fields is not supported",
        951 => "An unexpected error occurred",
        954 => "Unsupported XML grammar",
        955 => "No database name",
        956 => "Maximum number of database sessions exceeded",
        957 => "Conflicting commands",
        958 => "Parameter missing",
        959 => "Custom Web Publishing technology disabled",
        960 => "Parameter is invalid",
        _ => "Unknown error",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_codes() {
        assert_eq!(error_text(0), "No error");
        assert_eq!(error_text(401), "No records match the request");
        assert_eq!(error_text(102), "Field is missing");
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(error_text(-1), "Unknown error");
        assert_eq!(error_text(99_999), "Unknown error");
    }
}

//! Archival storage (Glacier) response parsers.
//!
//! Initiate-job, upload-archive and initiate-multipart-upload return their
//! identifiers in headers only; the body is empty.

use crate::response::{HeaderSource, HttpError, required_header};

pub const JOB_ID_HEADER: &str = "x-amz-job-id";
pub const ARCHIVE_ID_HEADER: &str = "x-amz-archive-id";
pub const MULTIPART_UPLOAD_ID_HEADER: &str = "x-amz-multipart-upload-id";

/// Job id from an initiate-job response.
pub fn parse_job_id_header<S: HeaderSource + ?Sized>(response: &S) -> Result<String, HttpError> {
    required_header(response, JOB_ID_HEADER, "Did not receive JobId")
}

/// Archive id from an upload-archive or complete-multipart-upload response.
pub fn parse_archive_id_header<S: HeaderSource + ?Sized>(
    response: &S,
) -> Result<String, HttpError> {
    required_header(response, ARCHIVE_ID_HEADER, "Did not receive ArchiveId")
}

pub fn parse_multipart_upload_id_header<S: HeaderSource + ?Sized>(
    response: &S,
) -> Result<String, HttpError> {
    required_header(
        response,
        MULTIPART_UPLOAD_ID_HEADER,
        "Did not receive Multipart upload Id",
    )
}

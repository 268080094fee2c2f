//! Required response header tests

use cirrus_providers::HttpError;
use cirrus_providers::glacier::{
    ARCHIVE_ID_HEADER, JOB_ID_HEADER, MULTIPART_UPLOAD_ID_HEADER, parse_archive_id_header,
    parse_job_id_header, parse_multipart_upload_id_header,
};

use crate::common::{post, start_header_mock};

#[tokio::test]
async fn job_id_from_initiate_job() {
    let server = start_header_mock(202, &[(JOB_ID_HEADER, "job-123")]).await;
    let response = post(&server, "/-/vaults/examplevault/jobs").await;
    assert_eq!(parse_job_id_header(&response).unwrap(), "job-123");
}

#[tokio::test]
async fn archive_id_from_upload() {
    let server = start_header_mock(201, &[(ARCHIVE_ID_HEADER, "archive-9")]).await;
    let response = post(&server, "/-/vaults/examplevault/archives").await;
    assert_eq!(parse_archive_id_header(&response).unwrap(), "archive-9");
    assert!(parse_job_id_header(&response).is_err());
}

#[tokio::test]
async fn multipart_upload_id_from_initiate() {
    let server = start_header_mock(201, &[(MULTIPART_UPLOAD_ID_HEADER, "upload-1")]).await;
    let response = post(&server, "/-/vaults/examplevault/multipart-uploads").await;
    assert_eq!(
        parse_multipart_upload_id_header(&response).unwrap(),
        "upload-1"
    );
}

#[tokio::test]
async fn missing_header_is_reported_not_retried() {
    let server = start_header_mock(202, &[]).await;
    let response = post(&server, "/-/vaults/examplevault/jobs").await;
    let err = parse_job_id_header(&response).unwrap_err();
    assert_eq!(
        err,
        HttpError::MissingHeader {
            header: JOB_ID_HEADER,
            message: "Did not receive JobId",
        }
    );
    assert_eq!(server.received_requests().await.unwrap().len(), 1);
}

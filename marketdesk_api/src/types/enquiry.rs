use serde::{Deserialize, Serialize};

use super::Timestamp;

/// A support enquiry from `/v2/support/contact-enquiries`.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ContactEnquiry {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub query_type: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub created_at: Option<Timestamp>,
}

/// Body for `POST /v2/support/contact-enquiries/{id}/reply`.
#[derive(Serialize, Clone, Debug)]
pub struct EnquiryReply {
    pub message: String,
}

//! The service actually delivering a message (by sending a POST request to the form relay)

use langclub_shared::{contact::ValidContact, urls::CONTACT_RELAY_ENDPOINT};
use web_sys::FormData;

#[derive(Debug, Default, Clone)]
pub struct FailureReply {
    pub message: String,
}
impl core::fmt::Display for FailureReply {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "{}", self.message)
    }
}

/// Send `contact` to the relay as one multipart POST. Any non-2xx answer is a failure.
pub async fn send_to_relay(contact: &ValidContact) -> Result<(), FailureReply> {
    let form_data = FormData::new().map_err(|e| FailureReply {
        message: format!("Unable to create form data: {e:?}"),
    })?;
    for (name, value) in contact.relay_fields() {
        form_data
            .append_with_str(name, &value)
            .map_err(|e| FailureReply {
                message: format!("Unable to add {name} to the form data: {e:?}"),
            })?;
    }

    let response = reqwasm::http::Request::post(CONTACT_RELAY_ENDPOINT)
        .header("Accept", "application/json")
        .body(form_data)
        .send()
        .await
        .map_err(|err| FailureReply {
            message: err.to_string(),
        })?;
    if response.ok() {
        Ok(())
    } else {
        Err(FailureReply {
            message: format!(
                "The relay answered {} {}",
                response.status(),
                response.status_text()
            ),
        })
    }
}

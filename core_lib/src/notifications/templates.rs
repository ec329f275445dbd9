//! Subject lines and HTML bodies for lead notification emails.

use crate::models::{Booking, ContactMessage, QuoteRequest};

const BRAND: &str = "TimberGuard Tree Services";

/// Anything that can be announced to the business owner by email.
pub trait NotificationContent {
    fn subject(&self) -> String;

    fn html_body(&self) -> String;
}

pub fn escape_html(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn or_na(value: &str) -> &str {
    if value.is_empty() {
        "N/A"
    } else {
        value
    }
}

fn render(heading: &str, rows: &[(&str, &str)], footer: &str) -> String {
    let rows: String = rows
        .iter()
        .map(|(label, value)| {
            format!(
                "            <p><strong>{}:</strong> {}</p>\n",
                label,
                escape_html(value)
            )
        })
        .collect();

    format!(
        r#"<html>
    <body style="font-family: Arial, sans-serif; padding: 20px; background-color: #f5f5f0;">
        <div style="max-width: 600px; margin: 0 auto; background: white; padding: 30px; border-left: 4px solid #F97316;">
            <h2 style="color: #1A3C34; margin-bottom: 20px;">{heading}</h2>
{rows}            <hr style="border: none; border-top: 1px solid #e5e5e0; margin: 20px 0;">
            <p style="color: #5A5A55; font-size: 12px;">{BRAND} - {footer}</p>
        </div>
    </body>
</html>"#
    )
}

impl NotificationContent for QuoteRequest {
    fn subject(&self) -> String {
        format!("New Quote Request from {}", self.name)
    }

    fn html_body(&self) -> String {
        render(
            "New Quote Request",
            &[
                ("Name", self.name.as_str()),
                ("Email", self.email.as_str()),
                ("Phone", self.phone.as_str()),
                ("Service", self.service.as_str()),
                ("Address", self.address.as_str()),
                ("Message", or_na(&self.message)),
            ],
            "Lead Notification",
        )
    }
}

impl NotificationContent for Booking {
    fn subject(&self) -> String {
        format!("New Booking from {}", self.name)
    }

    fn html_body(&self) -> String {
        render(
            "New Booking Request",
            &[
                ("Name", self.name.as_str()),
                ("Email", self.email.as_str()),
                ("Phone", self.phone.as_str()),
                ("Service", self.service.as_str()),
                ("Address", self.address.as_str()),
                ("Preferred Date", self.preferred_date.as_str()),
                ("Preferred Time", self.preferred_time.as_str()),
                ("Notes", or_na(&self.notes)),
            ],
            "Booking Notification",
        )
    }
}

impl NotificationContent for ContactMessage {
    fn subject(&self) -> String {
        format!("Contact: {}", self.subject)
    }

    fn html_body(&self) -> String {
        render(
            "New Contact Message",
            &[
                ("Name", self.name.as_str()),
                ("Email", self.email.as_str()),
                ("Phone", or_na(&self.phone)),
                ("Subject", self.subject.as_str()),
                ("Message", self.message.as_str()),
            ],
            "Contact Notification",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BookingStatus;
    use chrono::Utc;
    use uuid::Uuid;

    fn quote(message: &str) -> QuoteRequest {
        QuoteRequest {
            id: Uuid::new_v4(),
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            phone: "555".to_string(),
            service: "tree-removal".to_string(),
            address: "1 Main St".to_string(),
            message: message.to_string(),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<script>alert("x") & 'y'</script>"#),
            "&lt;script&gt;alert(&quot;x&quot;) &amp; &#x27;y&#x27;&lt;/script&gt;"
        );
        assert_eq!(escape_html("plain text"), "plain text");
    }

    #[test]
    fn test_quote_subject_and_body() {
        let record = quote("");
        assert_eq!(record.subject(), "New Quote Request from A");

        let html = record.html_body();
        assert!(html.contains("<h2 style=\"color: #1A3C34; margin-bottom: 20px;\">New Quote Request</h2>"));
        assert!(html.contains("<p><strong>Address:</strong> 1 Main St</p>"));
        assert!(html.contains("<p><strong>Message:</strong> N/A</p>"));
        assert!(html.contains("TimberGuard Tree Services - Lead Notification"));
    }

    #[test]
    fn test_user_input_is_escaped_in_body() {
        let record = quote("<b>urgent</b>");
        let html = record.html_body();
        assert!(html.contains("&lt;b&gt;urgent&lt;/b&gt;"));
        assert!(!html.contains("<b>urgent</b>"));
    }

    #[test]
    fn test_booking_and_contact_subjects() {
        let booking = Booking {
            id: Uuid::new_v4(),
            name: "Jo".to_string(),
            email: "jo@example.com".to_string(),
            phone: "555 0101".to_string(),
            service: "stump-grinding".to_string(),
            address: "2 Elm Rd".to_string(),
            preferred_date: "2024-12-25".to_string(),
            preferred_time: "10:00 AM - 12:00 PM".to_string(),
            notes: String::new(),
            status: BookingStatus::Pending,
            created_at: Utc::now(),
        };
        assert_eq!(booking.subject(), "New Booking from Jo");
        assert!(booking.html_body().contains("<p><strong>Preferred Time:</strong> 10:00 AM - 12:00 PM</p>"));

        let contact = ContactMessage {
            id: Uuid::new_v4(),
            name: "Sam".to_string(),
            email: "sam@example.com".to_string(),
            phone: String::new(),
            subject: "Pruning".to_string(),
            message: "Do you prune maples?".to_string(),
            created_at: Utc::now(),
        };
        assert_eq!(contact.subject(), "Contact: Pruning");
        assert!(contact.html_body().contains("<p><strong>Phone:</strong> N/A</p>"));
    }
}

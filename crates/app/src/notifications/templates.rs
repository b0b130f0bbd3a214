//! Email bodies for order events.

use std::fmt::Write as _;

use rust_decimal::Decimal;

use crate::domain::orders::records::OrderRecord;

use super::message::EmailMessage;

/// Store details shown in emails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Storefront {
    pub name: String,
    pub currency_symbol: String,
}

impl Storefront {
    fn money(&self, amount: Decimal) -> String {
        format!("{}{:.2}", self.currency_symbol, amount)
    }
}

/// Notification sent to the operator for every new order.
pub fn admin_notification(order: &OrderRecord, to: &str, store: &Storefront) -> EmailMessage {
    let mut text = format!(
        "New order received: #{reference}\n\
         Name: {name}\n\
         Phone: {phone}\n\
         Email: {email}\n\
         Address: {address}\n\
         Total: {total}\n\
         \n\
         Items ({units} units):\n",
        reference = order.reference,
        units = order.unit_count(),
        name = order.customer_name,
        phone = order.customer_phone.as_deref().unwrap_or("N/A"),
        email = order.customer_email.as_deref().unwrap_or("N/A"),
        address = order.address,
        total = store.money(order.total),
    );

    for item in &order.items {
        let _ = writeln!(
            text,
            "{}x {} - {}",
            item.quantity,
            item.name,
            store.money(item.line_total)
        );
    }

    EmailMessage::plain(to, format!("New order #{}", order.reference), text)
}

/// Confirmation sent to the customer, as plain text and HTML.
pub fn customer_confirmation(order: &OrderRecord, to: &str, store: &Storefront) -> EmailMessage {
    let mut text = format!(
        "Dear {name},\n\
         \n\
         Thank you for your order with {store}!\n\
         \n\
         Order Details:\n\
         Order ID: #{reference}\n\
         \n\
         Items:\n",
        name = order.customer_name,
        store = store.name,
        reference = order.reference,
    );

    for item in &order.items {
        let _ = writeln!(
            text,
            "{}x {} - {}",
            item.quantity,
            item.name,
            store.money(item.line_total)
        );
    }

    let _ = write!(
        text,
        "\nTotal: {total}\n\
         \n\
         Shipping Address:\n\
         {address}\n\
         \n\
         Payment Method: Cash on Delivery\n\
         \n\
         We'll process your order soon and deliver it to your address.\n\
         \n\
         Thank you for shopping with {store}!\n\
         \n\
         Best regards,\n\
         {store} Team",
        total = store.money(order.total),
        address = order.address,
        store = store.name,
    );

    let mut rows = String::new();

    for item in &order.items {
        let _ = write!(
            rows,
            "<tr><td>{}</td><td>{}</td><td align=\"right\">{}</td></tr>",
            item.quantity,
            escape_html(&item.name),
            escape_html(&store.money(item.line_total)),
        );
    }

    let html = format!(
        "<html><body>\
         <p>Dear {name},</p>\
         <p>Thank you for your order with {store}!</p>\
         <p><strong>Order ID:</strong> #{reference}</p>\
         <table>{rows}</table>\
         <p><strong>Total:</strong> {total}</p>\
         <p><strong>Shipping Address:</strong><br>{address}</p>\
         <p><strong>Payment Method:</strong> Cash on Delivery</p>\
         <p>We'll process your order soon and deliver it to your address.</p>\
         <p>Best regards,<br>{store} Team</p>\
         </body></html>",
        name = escape_html(&order.customer_name),
        store = escape_html(&store.name),
        reference = order.reference,
        total = escape_html(&store.money(order.total)),
        address = escape_html(&order.address).replace('\n', "<br>"),
    );

    EmailMessage::plain(
        to,
        format!("Order Confirmation - {} #{}", store.name, order.reference),
        text,
    )
    .with_html(html)
}

/// Message used to check that email delivery works end to end.
pub fn test_message(to: &str, store: &Storefront) -> EmailMessage {
    EmailMessage::plain(
        to,
        format!("Test Email from {}", store.name),
        format!(
            "This is a test email from the {} backend. If you receive this, email configuration is working correctly.",
            store.name
        ),
    )
}

fn escape_html(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());

    for c in raw.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }

    escaped
}

#[cfg(test)]
mod tests {
    use jiff::Timestamp;

    use crate::domain::{
        orders::{
            records::{LineItem, OrderId, PENDING_STATUS},
            reference::OrderReference,
        },
        products::records::ProductId,
    };

    use super::*;

    fn store() -> Storefront {
        Storefront {
            name: "Desi Aura".to_string(),
            currency_symbol: "₹".to_string(),
        }
    }

    fn order() -> OrderRecord {
        OrderRecord {
            id: OrderId::from_i64(1),
            reference: OrderReference::from_string("ORD-ABCDEFGHJK".to_string()),
            customer_name: "Asha <Admin>".to_string(),
            customer_email: Some("asha@example.com".to_string()),
            customer_phone: None,
            address: "12 MG Road\nBengaluru".to_string(),
            items: vec![LineItem {
                product_id: ProductId::from_i64(1),
                name: "Shirt".to_string(),
                unit_price: Decimal::from(899),
                quantity: 2,
                line_total: Decimal::from(1798),
            }],
            total: Decimal::from(1798),
            status: PENDING_STATUS.to_string(),
            created_at: Timestamp::UNIX_EPOCH,
            updated_at: Timestamp::UNIX_EPOCH,
        }
    }

    #[test]
    fn admin_notification_lists_contact_and_items() {
        let message = admin_notification(&order(), "ops@example.com", &store());

        assert_eq!(message.to, "ops@example.com");
        assert_eq!(message.subject, "New order #ORD-ABCDEFGHJK");
        assert!(message.text.contains("Phone: N/A"));
        assert!(message.text.contains("Email: asha@example.com"));
        assert!(message.text.contains("Total: ₹1798.00"));
        assert!(message.text.contains("Items (2 units):"));
        assert!(message.text.contains("2x Shirt - ₹1798.00"));
        assert_eq!(message.html, None);
    }

    #[test]
    fn customer_confirmation_has_text_and_escaped_html() {
        let message = customer_confirmation(&order(), "asha@example.com", &store());

        assert_eq!(
            message.subject,
            "Order Confirmation - Desi Aura #ORD-ABCDEFGHJK"
        );
        assert!(message.text.starts_with("Dear Asha <Admin>,"));
        assert!(message.text.contains("Payment Method: Cash on Delivery"));
        assert!(message.text.ends_with("Desi Aura Team"));

        let html = message.html.unwrap_or_default();

        assert!(html.contains("Dear Asha &lt;Admin&gt;,"));
        assert!(html.contains("12 MG Road<br>Bengaluru"));
        assert!(!html.contains("<Admin>"));
    }

    #[test]
    fn money_is_rendered_with_two_decimals() {
        assert_eq!(store().money(Decimal::new(3595, 1)), "₹359.50");
        assert_eq!(store().money(Decimal::from(7)), "₹7.00");
    }
}

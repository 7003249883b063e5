//! Localized notification templates
//!
//! Each event kind maps to an explicit [`LocalizedText`] subject; bodies are
//! rendered per locale from the event payload. There is no ambient locale,
//! callers pass one in.

use auction_core::{EventKind, Locale, LocalizedText, NotificationEvent};

/// Subject line for an event kind
pub fn subject(kind: EventKind) -> LocalizedText {
    match kind {
        EventKind::BookingConfirmation => LocalizedText::new("Your moving request is live")
            .with_variant(Locale::De, "Ihre Umzugsanfrage ist online"),
        EventKind::BidReceived => LocalizedText::new("New offer for your moving request")
            .with_variant(Locale::De, "Neues Angebot für Ihre Umzugsanfrage"),
        EventKind::WinnerDetermined => LocalizedText::new("A moving company has been selected")
            .with_variant(Locale::De, "Ein Umzugsunternehmen wurde ausgewählt"),
        EventKind::Reminder => LocalizedText::new("Your bidding window closes soon")
            .with_variant(Locale::De, "Ihre Angebotsfrist endet bald"),
        EventKind::ReviewRequest => LocalizedText::new("How did your move go?")
            .with_variant(Locale::De, "Wie war Ihr Umzug?"),
    }
}

/// Render a one-line body for `event` in `locale`
pub fn render(event: &NotificationEvent, locale: Locale) -> String {
    match (event, locale) {
        (NotificationEvent::BookingConfirmation { origin_city, destination_city, .. }, Locale::En) => {
            format!("Your moving request from {origin_city} to {destination_city} is now open for offers.")
        }
        (NotificationEvent::BookingConfirmation { origin_city, destination_city, .. }, Locale::De) => {
            format!("Ihre Umzugsanfrage von {origin_city} nach {destination_city} ist jetzt für Angebote geöffnet.")
        }
        (NotificationEvent::BidReceived { company_name, price, .. }, Locale::En) => {
            format!("{company_name} offered {price} for your move.")
        }
        (NotificationEvent::BidReceived { company_name, price, .. }, Locale::De) => {
            format!("{company_name} hat {price} für Ihren Umzug angeboten.")
        }
        (NotificationEvent::WinnerDetermined { company_name, price, .. }, Locale::En) => {
            format!("{company_name} will carry out your move for {price}.")
        }
        (NotificationEvent::WinnerDetermined { company_name, price, .. }, Locale::De) => {
            format!("{company_name} führt Ihren Umzug für {price} durch.")
        }
        (NotificationEvent::Reminder { window_end, .. }, Locale::En) => {
            format!("Offers for your moving request close at {window_end}.")
        }
        (NotificationEvent::Reminder { window_end, .. }, Locale::De) => {
            format!("Die Angebotsfrist für Ihre Umzugsanfrage endet am {window_end}.")
        }
        (NotificationEvent::ReviewRequest { .. }, Locale::En) => {
            "Tell us how your move went and rate your moving company.".to_string()
        }
        (NotificationEvent::ReviewRequest { .. }, Locale::De) => {
            "Erzählen Sie uns, wie Ihr Umzug war, und bewerten Sie Ihr Umzugsunternehmen.".to_string()
        }
    }
}

use shared::models::{DonationStatus, VerificationStatus};
use yew::{Html, Properties, function_component, html};

/// Badge class for a donation lifecycle status.
#[must_use]
pub fn donation_badge_class(status: DonationStatus) -> &'static str {
    match status {
        DonationStatus::Completed | DonationStatus::Delivered => "badge badge-success",
        DonationStatus::Validated | DonationStatus::InEscrow => "badge badge-info",
        DonationStatus::Created => "badge badge-neutral",
        DonationStatus::Disputed => "badge badge-warning",
        DonationStatus::Cancelled => "badge badge-error",
    }
}

/// Badge class for a verification status.
#[must_use]
pub fn verification_badge_class(status: VerificationStatus) -> &'static str {
    match status {
        VerificationStatus::Verified => "badge badge-success",
        VerificationStatus::Pending => "badge badge-warning",
        VerificationStatus::Rejected => "badge badge-error",
    }
}

#[derive(Properties, PartialEq)]
pub struct DonationStatusBadgeProps {
    pub status: DonationStatus,
}

#[function_component(DonationStatusBadge)]
pub fn donation_status_badge(props: &DonationStatusBadgeProps) -> Html {
    html! {
        <span class={donation_badge_class(props.status)}>{ props.status.as_str() }</span>
    }
}

#[derive(Properties, PartialEq)]
pub struct VerificationBadgeProps {
    pub status: VerificationStatus,
}

#[function_component(VerificationBadge)]
pub fn verification_badge(props: &VerificationBadgeProps) -> Html {
    html! {
        <span class={verification_badge_class(props.status)}>{ props.status.as_str() }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_donation_status_has_a_badge() {
        for status in [
            DonationStatus::Created,
            DonationStatus::InEscrow,
            DonationStatus::Validated,
            DonationStatus::Delivered,
            DonationStatus::Completed,
            DonationStatus::Disputed,
            DonationStatus::Cancelled,
        ] {
            assert!(donation_badge_class(status).starts_with("badge"));
        }
    }

    #[test]
    fn verification_tones() {
        assert!(verification_badge_class(VerificationStatus::Verified).contains("success"));
        assert!(verification_badge_class(VerificationStatus::Pending).contains("warning"));
        assert!(verification_badge_class(VerificationStatus::Rejected).contains("error"));
    }
}

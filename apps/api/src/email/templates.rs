//! Email templates — each key maps to a fixed preset of tone, type and key points.
//!
//! The mapping is a `match` over the enum, so adding a template without a
//! preset does not compile. Unknown keys are rejected when the request is
//! deserialized.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmailTemplate {
    Invoice,
    Login,
    AccountCreation,
    Newsletter,
    PasswordReset,
}

/// Defaults a template contributes to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplatePreset {
    pub label: &'static str,
    pub tone: &'static str,
    pub email_type: &'static str,
    pub description: &'static str,
    pub key_points: &'static [&'static str],
}

impl EmailTemplate {
    pub const ALL: [EmailTemplate; 5] = [
        EmailTemplate::Invoice,
        EmailTemplate::Login,
        EmailTemplate::AccountCreation,
        EmailTemplate::Newsletter,
        EmailTemplate::PasswordReset,
    ];

    /// Key as it appears on the wire.
    pub fn key(self) -> &'static str {
        match self {
            EmailTemplate::Invoice => "invoice",
            EmailTemplate::Login => "login",
            EmailTemplate::AccountCreation => "account_creation",
            EmailTemplate::Newsletter => "newsletter",
            EmailTemplate::PasswordReset => "password_reset",
        }
    }

    pub fn preset(self) -> TemplatePreset {
        match self {
            EmailTemplate::Invoice => TemplatePreset {
                label: "Invoice / Payment Reminder",
                tone: "formal",
                email_type: "business",
                description: "An invoice or payment reminder email that includes billing details, \
                    amount due, due date, polite tone, and payment link.",
                key_points: &[
                    "Include invoice number and due date",
                    "Mention total amount payable",
                    "Provide payment link or bank details",
                    "Add polite reminder about payment terms",
                ],
            },
            EmailTemplate::Login => TemplatePreset {
                label: "Login Verification / OTP",
                tone: "neutral",
                email_type: "notification",
                description: "A login verification or OTP email that includes a verification code, \
                    its expiry, and a security reminder not to share the code.",
                key_points: &[
                    "Include 6-digit OTP or verification code",
                    "Mention validity time (e.g., valid for 10 minutes)",
                    "Remind not to share code with anyone",
                    "Include support contact link",
                ],
            },
            EmailTemplate::AccountCreation => TemplatePreset {
                label: "Account Creation / Welcome Email",
                tone: "friendly",
                email_type: "onboarding",
                description: "A warm welcome email confirming account creation and introducing \
                    the platform's main features.",
                key_points: &[
                    "Welcome the new user warmly",
                    "Confirm successful account creation",
                    "Provide login link or getting started guide",
                    "Encourage engagement with your platform",
                ],
            },
            EmailTemplate::Newsletter => TemplatePreset {
                label: "Newsletter / Update Email",
                tone: "casual",
                email_type: "marketing",
                description: "A newsletter-style email with recent updates, product highlights, \
                    and social media links.",
                key_points: &[
                    "Share latest company news or blog posts",
                    "Highlight product updates or offers",
                    "Encourage following on social media",
                    "Add unsubscribe link at the end",
                ],
            },
            EmailTemplate::PasswordReset => TemplatePreset {
                label: "Password Reset / Security Email",
                tone: "neutral",
                email_type: "security",
                description: "A password reset email with a secure reset link, expiry information, \
                    and safety tips.",
                key_points: &[
                    "Include password reset link",
                    "Mention expiration time for the link",
                    "Reassure user if they didn't request it",
                    "Include contact info for support",
                ],
            },
        }
    }
}

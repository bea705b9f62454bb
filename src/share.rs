// Marketing message shown after a successful registration.

use crate::validation::format_user_name;

pub const SHARE_URL: &str = "https://lawvriksh.com";

pub fn generate_beta_share_message(user_name: &str) -> String {
    let formatted_name = format_user_name(user_name);

    format!(
        "🎉 Congratulations to {formatted_name} for becoming a beta testing founding member at LawVriksh!

✨ Welcome aboard! We're thrilled to have you join our growing community of legal professionals and enthusiasts.

By registering with LawVriksh, you've taken the first step towards unlocking a wealth of legal knowledge, connecting with peers, and staying ahead in the ever-evolving legal landscape.

🚀 As a beta member, you'll get:
• Early access to all features
• Direct input on product development
• Founding member status
• Priority support

Join the legal revolution at {SHARE_URL}

#LawVriksh #LegalTech #BetaMember #LegalProfessionals #Innovation"
    )
}

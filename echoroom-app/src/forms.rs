use echoroom_common::{OnboardingProfile, SignupRequest, User};
use rand::Rng;

pub const PLACEHOLDER_AVATAR_COUNT: u32 = 100;

/// Purely local: the new URL lands in the form field and only reaches the
/// backend when the form is submitted.
pub fn random_avatar_url(rng: &mut impl Rng) -> String {
    let idx = rng.gen_range(1..=PLACEHOLDER_AVATAR_COUNT);
    format!("https://avatar.iran.liara.run/public/{idx}.png")
}

#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub full_name: String,
    pub email: String,
    pub password: String,
    pub terms_accepted: bool,
    pub submitting: bool,
    pub error: Option<String>,
}

impl SignupForm {
    /// Required-field gate. Nothing reaches the network until every field
    /// is filled and the terms are accepted; password strength and email
    /// shape are left to the backend.
    pub fn validate(&self) -> Result<SignupRequest, String> {
        if self.full_name.is_empty() {
            return Err("Full name is required".to_string());
        }
        if self.email.is_empty() {
            return Err("Email is required".to_string());
        }
        if self.password.is_empty() {
            return Err("Password is required".to_string());
        }
        if !self.terms_accepted {
            return Err("Please accept the terms of service".to_string());
        }
        Ok(SignupRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }
}

#[derive(Debug, Clone, Default)]
pub struct OnboardingForm {
    pub full_name: String,
    pub bio: String,
    pub location: String,
    pub profile_pic: String,
    pub current_book: String,
    pub current_show: String,
    pub interests: String,
    pub submitting: bool,
}

impl OnboardingForm {
    pub fn from_profile(user: &User) -> Self {
        Self {
            full_name: user.full_name.clone(),
            bio: user.bio.clone(),
            location: user.location.clone(),
            profile_pic: user.profile_pic.clone(),
            current_book: user.current_book.clone(),
            current_show: user.current_show.clone(),
            interests: user.interests.clone(),
            submitting: false,
        }
    }

    /// The whole profile is submitted in one piece; empty strings mean
    /// "not set" and are sent as-is.
    pub fn to_profile(&self) -> OnboardingProfile {
        OnboardingProfile {
            full_name: self.full_name.clone(),
            bio: self.bio.clone(),
            location: self.location.clone(),
            profile_pic: self.profile_pic.clone(),
            current_book: self.current_book.clone(),
            current_show: self.current_show.clone(),
            interests: self.interests.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use echoroom_common::UserId;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn filled_form() -> SignupForm {
        SignupForm {
            full_name: "Ada Lovelace".to_string(),
            email: "ada@example.com".to_string(),
            password: "hunter22".to_string(),
            terms_accepted: true,
            ..Default::default()
        }
    }

    #[test]
    fn a_filled_form_produces_the_payload() {
        let request = filled_form().validate().unwrap();
        assert_eq!(request.full_name, "Ada Lovelace");
        assert_eq!(request.email, "ada@example.com");
        assert_eq!(request.password, "hunter22");
    }

    #[test]
    fn each_missing_field_blocks_submission() {
        let mut form = filled_form();
        form.full_name.clear();
        assert_eq!(form.validate().unwrap_err(), "Full name is required");

        let mut form = filled_form();
        form.email.clear();
        assert_eq!(form.validate().unwrap_err(), "Email is required");

        let mut form = filled_form();
        form.password.clear();
        assert_eq!(form.validate().unwrap_err(), "Password is required");
    }

    #[test]
    fn unaccepted_terms_block_submission() {
        let mut form = filled_form();
        form.terms_accepted = false;
        assert_eq!(form.validate().unwrap_err(), "Please accept the terms of service");
    }

    #[test]
    fn onboarding_form_round_trips_the_profile() {
        let user = User {
            id: UserId("u1".to_string()),
            full_name: "Ada Lovelace".to_string(),
            bio: "chess and chai".to_string(),
            location: "London, UK".to_string(),
            profile_pic: "https://example.com/pic.png".to_string(),
            current_book: "Dune".to_string(),
            current_show: "Dark".to_string(),
            interests: "Chess".to_string(),
            is_onboarded: false,
        };
        let form = OnboardingForm::from_profile(&user);
        assert_eq!(form.full_name, "Ada Lovelace");
        assert_eq!(form.current_book, "Dune");
        assert!(!form.submitting);

        let profile = form.to_profile();
        assert_eq!(profile.bio, "chess and chai");
        assert_eq!(profile.interests, "Chess");
    }

    #[test]
    fn avatar_urls_stay_inside_the_hosted_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let url = random_avatar_url(&mut rng);
            let idx: u32 = url
                .strip_prefix("https://avatar.iran.liara.run/public/")
                .and_then(|rest| rest.strip_suffix(".png"))
                .unwrap()
                .parse()
                .unwrap();
            assert!((1..=PLACEHOLDER_AVATAR_COUNT).contains(&idx));
        }
    }
}

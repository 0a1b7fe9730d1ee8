//! Prompt composition for the image provider.
//!
//! The final instruction text is assembled exactly once, at job creation,
//! from: an identity-preservation instruction, a mandatory clothing
//! instruction for the pet's gender, the title's prompt fragment with
//! generic placeholders substituted for the concrete species/gender,
//! beautification boilerplate, and a photorealism suffix. The composed
//! text is frozen into the job and never recomputed.

use std::sync::OnceLock;

use regex::Regex;

use crate::pet::{Gender, PetCategory, Species};

/// Keeps the generated portrait recognizably the same animal.
const IDENTITY_INSTRUCTION: &str =
    "maintain the original pet's appearance, facial features and unique markings";

/// Beautification boilerplate appended to every prompt.
const CUTENESS_INSTRUCTION: &str = "adorable and charming, cute endearing expression";

/// Photorealism style suffix.
const REALISTIC_STYLE: &str = "ultra realistic photograph, professional studio portrait, \
     detailed fur texture, sharp focus, beautiful lighting, high quality 8K";

/// Gender-specific appearance and wardrobe phrasing.
struct GenderTraits {
    cat: &'static str,
    dog: &'static str,
    clothing: &'static str,
    avoid: &'static str,
}

const FEMALE_TRAITS: GenderTraits = GenderTraits {
    cat: "elegant female cat with graceful features, feminine appearance, beautiful eyelashes",
    dog: "lovely female dog with gentle features, feminine appearance, beautiful eyes",
    clothing: "wearing elegant feminine attire, dress, skirt, or fashionable womens clothing",
    avoid: "avoid masculine suits, ties, or overly formal male business attire",
};

const MALE_TRAITS: GenderTraits = GenderTraits {
    cat: "handsome male cat with strong features, masculine appearance, confident look",
    dog: "handsome male dog with strong features, masculine appearance, confident look",
    clothing: "wearing smart masculine attire, suit, tie, or professional mens clothing",
    avoid: "avoid dresses, skirts, or feminine clothing",
};

fn traits_for(gender: Gender) -> &'static GenderTraits {
    match gender {
        Gender::Female => &FEMALE_TRAITS,
        Gender::Male => &MALE_TRAITS,
    }
}

fn appearance_for(category: PetCategory) -> &'static str {
    let traits = traits_for(category.gender);
    match category.species {
        Species::Cat => traits.cat,
        Species::Dog => traits.dog,
    }
}

/// Substitute the catalog's generic subject words (`pet`, `cat`, `dog`)
/// with the concrete gendered species in a single pass, so an already
/// substituted phrase is never re-expanded.
fn substitute_subject(fragment: &str, category: PetCategory) -> String {
    static SUBJECT: OnceLock<Regex> = OnceLock::new();
    let re = SUBJECT.get_or_init(|| Regex::new(r"(?i)\b(pet|cat|dog)\b").expect("valid regex"));

    let subject = format!("{} {}", category.gender.word(), category.species.word());
    let substituted = re.replace_all(fragment, subject.as_str()).into_owned();

    // Fragments without any subject word get one prepended.
    if substituted.to_lowercase().contains(category.species.word()) {
        substituted
    } else {
        format!("A {subject} {substituted}")
    }
}

/// Compose the final generation instruction for one title fragment.
pub fn compose_prompt(fragment: &str, category: PetCategory) -> String {
    let traits = traits_for(category.gender);
    format!(
        "{IDENTITY_INSTRUCTION}, {}, {}, {}, {}, {CUTENESS_INSTRUCTION}, {REALISTIC_STYLE}",
        traits.clothing,
        traits.avoid,
        substitute_subject(fragment, category),
        appearance_for(category),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cat_female() -> PetCategory {
        PetCategory::parse("cat_female").unwrap()
    }

    fn dog_male() -> PetCategory {
        PetCategory::parse("dog_male").unwrap()
    }

    #[test]
    fn substitutes_generic_pet_word() {
        let out = substitute_subject("A pet wearing a crown", cat_female());
        assert_eq!(out, "A female cat wearing a crown");
    }

    #[test]
    fn substitutes_species_word_with_gendered_form() {
        let out = substitute_subject("A dog riding a scooter", dog_male());
        assert_eq!(out, "A male dog riding a scooter");
    }

    #[test]
    fn substitution_is_single_pass() {
        // `pet` expands to `female cat`; the inserted `cat` must not be
        // expanded again into `female female cat`.
        let out = substitute_subject("A pet next to a pet", cat_female());
        assert_eq!(out, "A female cat next to a female cat");
    }

    #[test]
    fn does_not_touch_words_containing_subject_substrings() {
        let out = substitute_subject("A pet in a carpeted dogma-free room", cat_female());
        assert!(out.contains("carpeted"));
        assert!(out.contains("dogma-free"));
    }

    #[test]
    fn prepends_subject_when_fragment_lacks_one() {
        let out = substitute_subject("wearing thick glasses, buried in papers", dog_male());
        assert!(out.starts_with("A male dog "));
    }

    #[test]
    fn composed_prompt_carries_all_sections() {
        let prompt = compose_prompt("A pet in a spacesuit", cat_female());
        assert!(prompt.contains(IDENTITY_INSTRUCTION));
        assert!(prompt.contains(FEMALE_TRAITS.clothing));
        assert!(prompt.contains("female cat in a spacesuit"));
        assert!(prompt.contains(CUTENESS_INSTRUCTION));
        assert!(prompt.ends_with(REALISTIC_STYLE));
    }

    #[test]
    fn composition_is_deterministic() {
        let a = compose_prompt("A pet holding a golden spatula", dog_male());
        let b = compose_prompt("A pet holding a golden spatula", dog_male());
        assert_eq!(a, b);
    }
}

/// Common food terms used to refine provider searches. Lowercase; earlier
/// entries win when a name contains several, so a term must come before any
/// shorter term it contains.
pub const INGREDIENT_VOCABULARY: &[&str] = &[
    "chicken", "beef", "pork", "lamb", "turkey", "bacon", "sausage", "ham",
    "salmon", "tuna", "shrimp", "prawn", "cod", "crab", "lobster", "tofu",
    "tempeh", "chickpea", "lentil", "bean", "eggplant", "egg", "cheese",
    "mushroom", "spinach", "kale", "broccoli", "cauliflower", "zucchini",
    "sweet potato", "potato", "pumpkin", "squash", "carrot", "tomato",
    "avocado", "corn", "pepper", "onion", "garlic", "rice", "quinoa",
    "noodle", "pasta", "spaghetti", "bread", "oat", "chocolate", "banana",
    "apple", "strawberry", "blueberry", "lemon", "coconut", "peanut",
    "almond", "honey", "cinnamon",
];

/// First vocabulary term contained in `name`, ignoring case.
pub fn find_hint(name: &str) -> Option<&'static str> {
    let lower = name.to_lowercase();
    INGREDIENT_VOCABULARY
        .iter()
        .copied()
        .find(|term| lower.contains(term))
}

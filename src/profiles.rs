use serde_json::{Value, json};

/// One deployment variant of the generation adapter: a fixed system
/// instruction plus the output schema the model is asked to conform to.
/// Declared once at startup; never mutated afterwards.
#[derive(Debug, Clone)]
pub struct GenerationProfile {
    pub name: &'static str,
    pub system_instruction: &'static str,
    /// Gemini `responseSchema` declaration.
    pub response_schema: Value,
    /// Top-level fields the parsed output must carry. Checked locally as a
    /// backstop even though schema-constrained generation should guarantee it.
    pub required: &'static [&'static str],
    pub temperature: Option<f32>,
}

#[derive(Debug, Clone)]
pub struct Profiles {
    pub meal: GenerationProfile,
    pub food_bank: GenerationProfile,
}

impl Default for Profiles {
    fn default() -> Self {
        Self {
            meal: meal(),
            food_bank: food_bank(),
        }
    }
}

pub const MEAL_REQUIRED: &[&str] = &[
    "name",
    "description",
    "total_calories",
    "total_protein",
    "total_fat",
    "total_carbs",
    "foods",
];

const MEAL_FOOD_REQUIRED: &[&str] = &[
    "food_name",
    "serving_size",
    "calories",
    "fat",
    "carbs",
    "protein",
];

const MEAL_SYSTEM_INSTRUCTION: &str = r#"You are a nutritionist and a culinary master. You are given a list of foods that your client can eat,
and each item in the list contains the food name, the serving size, the calories per serving, the fat per serving, the carbs
per serving, and the protein per serving. Please create 1 meal from this given food list. You should calculate the total calories,
total fat, total carbs, and the total protein of the meal based on the number of servings you’re recommending and the calories, fat,
carbs, and protein per serving. You should create a name for this meal, a one sentence description, and specify each food you used
in the meal, and the serving size, total calories, fat, carbs, and protein. We will also give you the number of calories, fat, carbs,
and protein the user wants to eat for this meal. Please make your meal’s total calories, fat, carbs, and protein come as close to
possible as what the user wants to eat with it serving as a lower bound. Please limit yourself to only using a maximum of 7 ingredients.
For each food, specify how many calories, fat, carbs, and protein the total serving.
When responding to future queries, you MUST return in the following JSON format, no other comments necessary:"#;

const FOOD_BANK_SYSTEM_INSTRUCTION: &str = r#"You are a helper ChatBot for a food bank called the Capital Area Foodbank. Your job is to help customers find food banks in their area that they can access to get food. The following are criteria that you will use to give an array of food banks that fits the criteria of a customer. You will use the attached file and filter it based on the responses of the customer.
We have the following information:
Please share your address or location.
The client will enter their address or location into a GIS (like CAFB’s Get Help Map) and pull up top ~50 sites, ranked by geographic proximity. In the provided text file, ignore any text that comes before the number which starts the addresses.
Would you like to get food today or another day this week?
Filter nearby sites by days of operation based on client preference. Interpret the week of the month field to know which distributions will be happening soonest.
Follow up: If another day, what day?
What time of day would you like to pick up food?
Filter by hours of operation and see who is open on those hours of the day.
Are you able to travel to a food pantry using a private vehicle or public transit?
If yes, move to next question.
If no, skip to question 8
Do you have any dietary restrictions or diet-related illness?
If client says they are diabetic, have hypertension, need low sodium, need low sugar, want fresh produce, or anything else indicating an all-produce menu would be ideal, filter by <Associated Program = Community Marketplace or Mobile Market>
If client says they eat Halal, filter by <Cultural Populations Served = Middle Eastern/North African>
If no, continue to question 6.
Do you have access to a kitchen to store and/or cook food?
If yes, continue to question 7
If no, filter by <Food Format = Prepared meals> or the word “meals” in <Additional Note>
Do you also need any of these other services? Potential options include: Housing, Government benefits, Financial assistance, Services for older adults, Behavioral health Health care, Child care, English language classes, Job training
If yes, interpret the client requests and filter by the other services (<Wraparound Service>) the partner offers
Can a relative or friend can travel to a pantry for you?
If yes, suggest 3 options (as above) with slightly different language (e.g., “Tell your friend or family member to call…”)
If no, search filter by <Distribution Model = Home delivery> and suggest 3 options. Include a special message that says “If you are not able to be served by any of these organizations, please call 202-644-9807 for more support.”
What is your cultural background?
Filter by cultural population served
Your instructions:
Suggest at least 3 food pantry options to client based on answers above, including address and phone number. Tell the customer to call the pantry before visiting to confirm hours of operation.
Prioritize soonest day, geographic proximity, and hours of operation as top 3 factors
If any food pantry requirements (e.g., <Food Pantry Requirements = ID>, list those with the recommendation (e.g., “You will need to bring your ID with you to this pantry)
If “by appointment only,” advise to make an appointment beforehand"#;

/// Meal-planning variant: nested schema with a per-food breakdown.
pub fn meal() -> GenerationProfile {
    GenerationProfile {
        name: "meal",
        system_instruction: MEAL_SYSTEM_INSTRUCTION,
        response_schema: json!({
            "type": "OBJECT",
            "required": MEAL_REQUIRED,
            "properties": {
                "name": { "type": "STRING" },
                "description": { "type": "STRING" },
                "total_calories": { "type": "NUMBER" },
                "total_protein": { "type": "NUMBER" },
                "total_fat": { "type": "NUMBER" },
                "total_carbs": { "type": "NUMBER" },
                "foods": {
                    "type": "ARRAY",
                    "items": {
                        "type": "OBJECT",
                        "required": MEAL_FOOD_REQUIRED,
                        "properties": {
                            "food_name": { "type": "STRING" },
                            "serving_size": { "type": "STRING" },
                            "calories": { "type": "NUMBER" },
                            "fat": { "type": "NUMBER" },
                            "carbs": { "type": "NUMBER" },
                            "protein": { "type": "NUMBER" }
                        }
                    }
                }
            }
        }),
        required: MEAL_REQUIRED,
        temperature: Some(0.35),
    }
}

/// Food-bank recommendation variant: flat schema, no required fields
/// declared upstream.
pub fn food_bank() -> GenerationProfile {
    GenerationProfile {
        name: "food-bank",
        system_instruction: FOOD_BANK_SYSTEM_INSTRUCTION,
        response_schema: json!({
            "type": "OBJECT",
            "properties": {
                "name": { "type": "STRING" },
                "address": { "type": "STRING" },
                "hours": { "type": "STRING" },
                "phone": { "type": "STRING" },
                "note": { "type": "STRING" }
            }
        }),
        required: &[],
        temperature: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_schema_declares_every_required_field() {
        let profile = meal();
        let declared = profile.response_schema["required"]
            .as_array()
            .expect("meal schema carries a required array")
            .iter()
            .map(|v| v.as_str().unwrap().to_string())
            .collect::<Vec<_>>();
        assert_eq!(declared, MEAL_REQUIRED);
        for field in MEAL_REQUIRED {
            assert!(
                !profile.response_schema["properties"][field].is_null(),
                "property {field} missing from meal schema"
            );
        }
    }

    #[test]
    fn food_bank_schema_is_flat() {
        let profile = food_bank();
        assert!(profile.required.is_empty());
        let properties = profile.response_schema["properties"]
            .as_object()
            .expect("food bank schema has properties");
        for field in ["name", "address", "hours", "phone", "note"] {
            assert!(properties.contains_key(field));
            assert_eq!(properties[field]["type"], "STRING");
        }
    }
}

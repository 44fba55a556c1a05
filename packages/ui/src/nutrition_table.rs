use dioxus::prelude::*;
use store::NutritionFact;

/// The nutrition-facts table. Filtering happens in the page; this renders
/// whatever rows it is given.
#[component]
pub fn NutritionTable(facts: Vec<NutritionFact>) -> Element {
    rsx! {
        table {
            class: "nutrition-table",
            thead {
                tr {
                    th { "Food" }
                    th { "Portion" }
                    th { "Calories" }
                    th { "Carbs (g)" }
                    th { "Protein (g)" }
                    th { "Fat (g)" }
                    th { "Fiber (g)" }
                    th { title: "Glycemic index", "GI" }
                }
            }
            tbody {
                for fact in &facts {
                    tr {
                        key: "{fact.id}",
                        td { class: "nutrition-food", "{fact.food}" }
                        td { "{fact.portion}" }
                        td { "{fact.calories}" }
                        td { "{fact.carbs_g}" }
                        td { "{fact.protein_g}" }
                        td { "{fact.fat_g}" }
                        td { "{fact.fiber_g}" }
                        td {
                            match fact.glycemic_index {
                                Some(gi) => rsx! { "{gi}" },
                                None => rsx! { span { class: "nutrition-no-gi", "—" } },
                            }
                        }
                    }
                }
            }
        }
    }
}

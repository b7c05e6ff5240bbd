//! Static company registration form.
//!
//! Inputs are uncontrolled and the submit button has no handler: nothing is
//! captured, validated, or sent. Switching away from the form view drops the
//! subtree, so anything typed is discarded.

use leptos::prelude::*;

pub const INDUSTRY_SECTORS: [&str; 3] = ["Technology", "Finance", "Healthcare"];

pub const EMPLOYEE_SIZES: [&str; 3] = ["1-50", "51-200", "200+"];

#[component]
pub fn RegistrationForm() -> impl IntoView {
    view! {
        <div class="panel">
            <h2 class="panel__title">"Company Registration"</h2>
            <form class="registration-form">
                <div class="registration-form__grid">
                    <div class="registration-form__field">
                        <label class="registration-form__label" for="companyName">"Company Name"</label>
                        <input
                            class="registration-form__input"
                            id="companyName"
                            type="text"
                            placeholder="Enter company name"
                        />
                    </div>
                    <div class="registration-form__field">
                        <label class="registration-form__label" for="industry">"Industry Sector"</label>
                        <select class="registration-form__input registration-form__select" id="industry">
                            {INDUSTRY_SECTORS
                                .iter()
                                .map(|sector| view! { <option>{*sector}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                    </div>
                </div>

                <fieldset class="registration-form__field">
                    <legend class="registration-form__label">"Employee Size"</legend>
                    <div class="registration-form__radios">
                        {EMPLOYEE_SIZES
                            .iter()
                            .map(|size| {
                                view! {
                                    <label class="registration-form__radio">
                                        <input type="radio" name="employeeSize" value=*size/>
                                        <span>{*size}</span>
                                    </label>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                </fieldset>

                <div class="registration-form__grid">
                    <div class="registration-form__field">
                        <label class="registration-form__label" for="email">"Contact Email"</label>
                        <input
                            class="registration-form__input"
                            id="email"
                            type="email"
                            placeholder="Enter contact email"
                        />
                    </div>
                    <div class="registration-form__field">
                        <label class="registration-form__label" for="city">"Headquarters City"</label>
                        <input
                            class="registration-form__input"
                            id="city"
                            type="text"
                            placeholder="Enter headquarters city"
                        />
                    </div>
                </div>

                <div class="registration-form__field">
                    <label class="registration-form__checkbox">
                        <input type="checkbox"/>
                        <span>"Agree to Terms and Conditions"</span>
                    </label>
                </div>

                <div class="registration-form__actions">
                    <button class="btn btn--primary" type="button">"Submit"</button>
                </div>
            </form>
        </div>
    }
}

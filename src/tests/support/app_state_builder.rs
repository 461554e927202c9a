use actix_web::web;
use std::sync::Arc;

use crate::modules::account::application::account_use_cases::AccountUseCases;
use crate::modules::auth::application::auth_use_cases::AuthUseCases;
use crate::modules::ingredient::application::ingredient_use_cases::IngredientUseCases;
use crate::modules::recipe::application::recipe_use_cases::RecipeUseCases;
use crate::modules::tag::application::tag_use_cases::TagUseCases;
use crate::tests::support::stubs::NotUsed;
use crate::AppState;

/// Every slot starts as [`NotUsed`]; tests swap in the use cases they
/// exercise through the `with_*` closures.
pub struct TestAppStateBuilder {
    account: AccountUseCases,
    auth: AuthUseCases,
    tag: TagUseCases,
    ingredient: IngredientUseCases,
    recipe: RecipeUseCases,
    client_login_url: String,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        let stub = Arc::new(NotUsed);
        Self {
            account: AccountUseCases {
                register: stub.clone(),
                activate: stub.clone(),
                request_activation: stub.clone(),
                request_password_reset: stub.clone(),
                reset_password: stub.clone(),
                change_password: stub.clone(),
                get_profile: stub.clone(),
                update_profile: stub.clone(),
                toggle_ban: stub.clone(),
                resolve_oauth: stub.clone(),
                list: stub.clone(),
                create: stub.clone(),
                get: stub.clone(),
                delete: stub.clone(),
            },
            auth: AuthUseCases {
                login: stub.clone(),
                logout: stub.clone(),
                refresh: stub.clone(),
                activation_login: stub.clone(),
                oauth_login: stub.clone(),
            },
            tag: TagUseCases {
                create: stub.clone(),
                get_list: stub.clone(),
                remove: stub.clone(),
            },
            ingredient: IngredientUseCases {
                create: stub.clone(),
                get_list: stub.clone(),
                remove: stub.clone(),
            },
            recipe: RecipeUseCases {
                create: stub.clone(),
                get_list: stub,
            },
            client_login_url: "http://localhost:3000/login".to_string(),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_account(mut self, f: impl FnOnce(&mut AccountUseCases)) -> Self {
        f(&mut self.account);
        self
    }

    pub fn with_auth(mut self, f: impl FnOnce(&mut AuthUseCases)) -> Self {
        f(&mut self.auth);
        self
    }

    pub fn with_tag(mut self, f: impl FnOnce(&mut TagUseCases)) -> Self {
        f(&mut self.tag);
        self
    }

    pub fn with_ingredient(mut self, f: impl FnOnce(&mut IngredientUseCases)) -> Self {
        f(&mut self.ingredient);
        self
    }

    pub fn with_recipe(mut self, f: impl FnOnce(&mut RecipeUseCases)) -> Self {
        f(&mut self.recipe);
        self
    }

    pub fn with_client_login_url(mut self, url: &str) -> Self {
        self.client_login_url = url.to_string();
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            account: self.account,
            auth: self.auth,
            tag: self.tag,
            ingredient: self.ingredient,
            recipe: self.recipe,
            client_login_url: self.client_login_url,
        })
    }
}

use chrono::{DateTime, Utc};

use crate::modules::account::adapter::outgoing::sea_orm_entity::{accounts, user_info};
use crate::modules::account::application::domain::entities::Account;
use crate::modules::account::application::ports::outgoing::{
    AccountListItem, AccountProfileView, UserInfoView,
};

/// Enum columns are constrained varchars; a value outside the set is a data error.
pub(crate) fn to_account(model: accounts::Model) -> Result<Account, String> {
    Ok(Account {
        id: model.id,
        email: model.email,
        username: model.username,
        password_hash: model.password,
        role: model.role.parse().map_err(|e| format!("{e}: {}", model.role))?,
        account_type: model
            .account_type
            .parse()
            .map_err(|e| format!("{e}: {}", model.account_type))?,
        is_active: model.is_active,
        is_banned: model.is_banned,
        code_id: model.code_id,
        code_expired: model.code_expired.map(|t| t.with_timezone(&Utc)),
        is_deleted: model.is_deleted,
        created_at: model.created_at.with_timezone(&Utc),
        updated_at: model.updated_at.with_timezone(&Utc),
    })
}

pub(crate) fn to_user_info(model: user_info::Model) -> Result<UserInfoView, String> {
    Ok(UserInfoView {
        gender: model
            .gender
            .parse()
            .map_err(|e| format!("{e}: {}", model.gender))?,
        first_name: model.first_name,
        last_name: model.last_name,
        phone: model.phone,
        dob: model.dob,
        address: model.address,
        avatar_url: model.avatar_url,
    })
}

pub(crate) fn to_profile(
    account: accounts::Model,
    info: user_info::Model,
) -> Result<AccountProfileView, String> {
    let account = to_account(account)?;
    let info = to_user_info(info)?;

    Ok(AccountProfileView {
        id: account.id,
        email: account.email,
        username: account.username,
        role: account.role,
        phone: info.phone,
        first_name: info.first_name,
        last_name: info.last_name,
        dob: info.dob,
        address: info.address,
        gender: info.gender,
        avatar_url: info.avatar_url,
    })
}

pub(crate) fn to_list_item(
    account: accounts::Model,
    info: Option<user_info::Model>,
) -> Result<AccountListItem, String> {
    let user_info = info.map(to_user_info).transpose()?;
    let account = to_account(account)?;

    Ok(AccountListItem {
        id: account.id,
        email: account.email,
        username: account.username,
        role: account.role,
        account_type: account.account_type,
        is_active: account.is_active,
        is_banned: account.is_banned,
        is_deleted: account.is_deleted,
        user_info,
        created_at: account.created_at,
        updated_at: account.updated_at,
    })
}

pub(crate) fn to_db_time(t: DateTime<Utc>) -> sea_orm::prelude::DateTimeWithTimeZone {
    t.fixed_offset()
}

#[cfg(test)]
pub(crate) mod test_models {
    use super::*;
    use uuid::Uuid;

    pub fn account_model(id: Uuid, role: &str) -> accounts::Model {
        let now = Utc::now().fixed_offset();
        accounts::Model {
            id,
            email: Some("cook@example.com".to_string()),
            username: Some("cookmaster".to_string()),
            password: Some("$2b$10$hash".to_string()),
            role: role.to_string(),
            account_type: "LOCAL".to_string(),
            is_active: true,
            is_banned: false,
            code_id: None,
            code_expired: None,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn info_model(account_id: Uuid) -> user_info::Model {
        let now = Utc::now().fixed_offset();
        user_info::Model {
            account_id,
            first_name: "Ana".to_string(),
            last_name: "Tran".to_string(),
            phone: Some("0901234567".to_string()),
            dob: chrono::NaiveDate::from_ymd_opt(1999, 3, 7),
            address: None,
            gender: "FEMALE".to_string(),
            avatar_url: None,
            is_deleted: false,
            created_at: now,
            updated_at: now,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_models::*;
    use super::*;
    use crate::modules::account::application::domain::entities::{Gender, Role};
    use uuid::Uuid;

    #[test]
    fn maps_enum_columns() {
        let id = Uuid::new_v4();
        let account = to_account(account_model(id, "STAFF")).unwrap();
        assert_eq!(account.role, Role::Staff);

        let profile = to_profile(account_model(id, "USER"), info_model(id)).unwrap();
        assert_eq!(profile.gender, Gender::Female);
        assert_eq!(profile.first_name, "Ana");
    }

    #[test]
    fn unknown_role_is_a_data_error() {
        let err = to_account(account_model(Uuid::new_v4(), "ROOT")).unwrap_err();
        assert!(err.contains("ROOT"));
    }
}

use crate::shared::config::page_size;
use crate::shared::crud::list::CrudListPage;
use crate::shared::crud::{
    checked, CellValue, Column, EntityDescriptor, FieldKind, FieldSpec, OptionSource,
};
use crate::system::auth::guard::RequireAdmin;
use contracts::system::users::{User, UserDto, ENDPOINT};
use leptos::prelude::*;

const ROLES: &[(&str, &str)] = &[
    ("admin", "Administrator"),
    ("operator", "Operator"),
    ("gudang", "Staf Gudang"),
];

static DESCRIPTOR: EntityDescriptor<User> = EntityDescriptor {
    title: "Pengguna",
    singular: "Pengguna",
    endpoint: ENDPOINT,
    columns: &[
        Column {
            key: "username",
            label: "Username",
            value: |u| CellValue::text(&u.username),
            searchable: true,
        },
        Column {
            key: "nama",
            label: "Nama",
            value: |u| CellValue::text(&u.full_name),
            searchable: true,
        },
        Column {
            key: "role",
            label: "Role",
            value: |u| CellValue::text(u.role.label()),
            searchable: true,
        },
        Column {
            key: "aktif",
            label: "Aktif",
            value: |u| CellValue::Flag(u.is_active),
            searchable: false,
        },
    ],
    fields: &[
        FieldSpec::new("username", "Username", FieldKind::Text),
        FieldSpec::new("nama", "Nama lengkap", FieldKind::Text),
        FieldSpec::new("role", "Role", FieldKind::Select(OptionSource::Fixed(ROLES)))
            .default_value("operator"),
        FieldSpec::new("password", "Password", FieldKind::Password)
            .placeholder("Kosongkan jika tidak diubah"),
        FieldSpec::new("aktif", "Aktif", FieldKind::Checkbox).default_value("true"),
    ],
    page_size: page_size::REFERENCE,
    default_sort: "username",
    excel: false,
    validate: |body, creating| checked::<UserDto, _>(body, |dto| dto.validate(creating)),
};

/// User administration; only rendered for roles allowed to manage users.
#[component]
#[allow(non_snake_case)]
pub fn UsersListPage() -> impl IntoView {
    view! {
        <RequireAdmin>
            <CrudListPage descriptor=&DESCRIPTOR />
        </RequireAdmin>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::crud::{form_payload, initial_values};
    use contracts::enums::role::Role;

    #[test]
    fn test_role_options_match_codes() {
        for (code, label) in ROLES {
            let role = Role::from_code(code).unwrap();
            assert_eq!(role.label(), *label);
        }
        assert_eq!(ROLES.len(), Role::ALL.len());
    }

    #[test]
    fn test_new_user_defaults() {
        let values = initial_values::<User>(DESCRIPTOR.fields, None);
        assert_eq!(values["role"], "operator");
        assert_eq!(values["aktif"], "true");
        assert_eq!(values["password"], "");
    }

    #[test]
    fn test_password_only_required_when_creating() {
        let mut values = initial_values::<User>(DESCRIPTOR.fields, None);
        values.insert("username", "rina_ops".into());
        values.insert("nama", "Rina".into());
        let body = form_payload(DESCRIPTOR.fields, &values).unwrap();

        assert_eq!(
            (DESCRIPTOR.validate)(body.clone(), true).unwrap_err(),
            "Password wajib diisi"
        );
        let checked = (DESCRIPTOR.validate)(body, false).unwrap();
        assert!(checked.get("password").is_none());
        assert_eq!(checked["role"], "operator");
    }

    #[test]
    fn test_edit_never_prefills_password() {
        let user = User {
            id: 4,
            username: "rina_ops".into(),
            full_name: "Rina".into(),
            role: Role::Gudang,
            is_active: false,
        };
        let values = initial_values(DESCRIPTOR.fields, Some(&user));
        assert_eq!(values["role"], "gudang");
        assert_eq!(values["aktif"], "false");
        assert_eq!(values["password"], "");
    }
}

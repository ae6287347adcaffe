//! Launch-specification affinity fields: image, login, and user data.

use crate::{
    affinity,
    domain::{CustomImage, Group, Image, Login, MarketplaceImage},
};
use fleetform::prelude::*;
use std::collections::BTreeMap;

pub const IMAGE: &str = "image";
pub const MARKETPLACE: &str = "marketplace";
pub const CUSTOM: &str = "custom";
pub const PUBLISHER: &str = "publisher";
pub const OFFER: &str = "offer";
pub const SKU: &str = "sku";
pub const IMAGE_NAME: &str = "image_name";
pub const RESOURCE_GROUP_NAME: &str = "resource_group_name";

pub const LOGIN: &str = "login";
pub const USER_NAME: &str = "user_name";
pub const SSH_PUBLIC_KEY: &str = "ssh_public_key";

pub const USER_DATA: &str = "user_data";

pub(crate) fn register(registry: &mut Registry<Group>) -> Result<(), RegistryError> {
    registry.register(
        Field::new(
            affinity::LAUNCH,
            IMAGE,
            FieldSchema::new(SchemaKind::Block).opt(),
            apply_image,
            apply_image,
        )
        .with_populate(populate_image),
    )?;

    // Login credentials are fixed at creation by the backend.
    registry.register(
        Field::new(
            affinity::LAUNCH,
            LOGIN,
            FieldSchema::new(SchemaKind::Block).opt(),
            apply_login,
            apply_login,
        )
        .with_populate(populate_login)
        .immutable(),
    )?;

    // Write-only: the backend never returns user data, so there is no
    // populate hook and the field is skipped during read.
    registry.register(Field::new(
        affinity::LAUNCH,
        USER_DATA,
        FieldSchema::new(SchemaKind::String).opt(),
        apply_user_data,
        apply_user_data,
    ))?;

    Ok(())
}

fn populate_image(group: &Group, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(image) = group.launch_spec().and_then(|l| l.image.as_ref()) {
        declared.set(IMAGE, flatten_image(image));
    }
    Ok(())
}

fn apply_image(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(IMAGE) {
        let image = expand_image(value)?;
        group.launch_spec_mut().image = Some(image);
    }
    Ok(())
}

fn populate_login(group: &Group, declared: &mut DeclaredConfig) -> Result<(), HookError> {
    if let Some(login) = group.launch_spec().and_then(|l| l.login.as_ref()) {
        declared.set(LOGIN, flatten_login(login));
    }
    Ok(())
}

fn apply_login(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared.get(LOGIN) {
        let login = expand_login(value)?;
        group.launch_spec_mut().login = Some(login);
    }
    Ok(())
}

fn apply_user_data(group: &mut Group, declared: &DeclaredConfig) -> Result<(), HookError> {
    if let Some(value) = declared
        .get(USER_DATA)
        .and_then(ConfigValue::as_str)
        .filter(|v| !v.is_empty())
    {
        group.launch_spec_mut().user_data = Some(value.to_string());
    }
    Ok(())
}

//
// Utils
//

fn expand_image(value: &ConfigValue) -> Result<Image, HookError> {
    let block = value
        .as_block()
        .ok_or("invalid image configuration")?;

    let mut image = Image::default();
    if let Some(marketplace) = block.get(MARKETPLACE) {
        image.marketplace = Some(expand_marketplace_image(marketplace)?);
    }
    if let Some(custom) = block.get(CUSTOM) {
        image.custom = Some(expand_custom_image(custom)?);
    }

    // A well-formed block names exactly one source.
    if image.marketplace.is_some() == image.custom.is_some() {
        return Err("invalid image configuration".into());
    }

    Ok(image)
}

fn expand_marketplace_image(value: &ConfigValue) -> Result<MarketplaceImage, HookError> {
    let block = value
        .as_block()
        .ok_or("invalid marketplace image configuration")?;

    let mut marketplace = MarketplaceImage::default();
    if let Some(v) = get_str(block, PUBLISHER) {
        marketplace.publisher = Some(v.to_string());
    }
    if let Some(v) = get_str(block, OFFER) {
        marketplace.offer = Some(v.to_string());
    }
    if let Some(v) = get_str(block, SKU) {
        marketplace.sku = Some(v.to_string());
    }

    Ok(marketplace)
}

fn expand_custom_image(value: &ConfigValue) -> Result<CustomImage, HookError> {
    let block = value
        .as_block()
        .ok_or("invalid custom image configuration")?;

    let mut custom = CustomImage::default();
    if let Some(v) = get_str(block, IMAGE_NAME) {
        custom.image_name = Some(v.to_string());
    }
    if let Some(v) = get_str(block, RESOURCE_GROUP_NAME) {
        custom.resource_group_name = Some(v.to_string());
    }

    Ok(custom)
}

fn expand_login(value: &ConfigValue) -> Result<Login, HookError> {
    let block = value.as_block().ok_or("invalid login configuration")?;

    let mut login = Login::default();
    if let Some(v) = get_str(block, USER_NAME) {
        login.user_name = Some(v.to_string());
    }
    if let Some(v) = get_str(block, SSH_PUBLIC_KEY) {
        login.ssh_public_key = Some(v.to_string());
    }

    Ok(login)
}

fn flatten_image(image: &Image) -> ConfigValue {
    let mut block = BTreeMap::new();
    if let Some(marketplace) = &image.marketplace {
        let mut entries = BTreeMap::new();
        set_str(&mut entries, PUBLISHER, marketplace.publisher.as_deref());
        set_str(&mut entries, OFFER, marketplace.offer.as_deref());
        set_str(&mut entries, SKU, marketplace.sku.as_deref());
        block.insert(MARKETPLACE.to_string(), ConfigValue::Block(entries));
    }
    if let Some(custom) = &image.custom {
        let mut entries = BTreeMap::new();
        set_str(&mut entries, IMAGE_NAME, custom.image_name.as_deref());
        set_str(
            &mut entries,
            RESOURCE_GROUP_NAME,
            custom.resource_group_name.as_deref(),
        );
        block.insert(CUSTOM.to_string(), ConfigValue::Block(entries));
    }

    ConfigValue::Block(block)
}

fn flatten_login(login: &Login) -> ConfigValue {
    let mut entries = BTreeMap::new();
    set_str(&mut entries, USER_NAME, login.user_name.as_deref());
    set_str(&mut entries, SSH_PUBLIC_KEY, login.ssh_public_key.as_deref());

    ConfigValue::Block(entries)
}

fn get_str<'a>(block: &'a BTreeMap<String, ConfigValue>, key: &str) -> Option<&'a str> {
    block
        .get(key)
        .and_then(ConfigValue::as_str)
        .filter(|v| !v.is_empty())
}

fn set_str(block: &mut BTreeMap<String, ConfigValue>, key: &str, value: Option<&str>) {
    if let Some(value) = value {
        block.insert(key.to_string(), ConfigValue::from(value));
    }
}

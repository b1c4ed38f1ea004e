//! Address-book commands.
//!
//! Every handler loads the contact collection, works on it in memory and saves
//! it back before returning. Field values are validated by the typed
//! constructors in [`crate::model::fields`] before anything is touched.

use super::args::{
    BIRTHDAY, CITY, COUNTRY, DAYS, EMAIL, NAME, NEW_PHONE, OLD_PHONE, PHONE, POSTCODE, STREET,
};
use super::helpers::{find_contact, update_contact};
use super::{Args, CmdMessage, CmdResult, Context};
use crate::error::{OstapError, Result};
use crate::model::{Address, Birthday, Contact, Email, Name, Phone, PhoneStatus};
use crate::store::address_book::MAX_BIRTHDAY_WINDOW;
use crate::store::DataStore;

fn address_from(args: &Args) -> Address {
    Address::new(
        args.get(STREET.key),
        args.get(CITY.key),
        args.get(COUNTRY.key),
        args.get(POSTCODE.key),
    )
}

fn phone_added_message(status: PhoneStatus, phone: &Phone, name: &str) -> CmdMessage {
    match status {
        PhoneStatus::Added => CmdMessage::success(format!(
            "Phone number {} for user {} added successfully.",
            phone, name
        )),
        PhoneStatus::AlreadyPresent => CmdMessage::info(format!(
            "Phone number {} for user {} already exists.",
            phone, name
        )),
    }
}

pub fn add_record<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let name = Name::new(args.get(NAME.key))?;
    let phone = Phone::new(args.get(PHONE.key))?;
    let birthday = Birthday::new(args.get(BIRTHDAY.key))?;
    let email = Email::new(args.get(EMAIL.key))?;
    let address = address_from(args);

    let mut contacts = ctx.store.load::<Contact>()?;

    if let Some(existing) = contacts.get_mut(name.as_str()) {
        let status = existing.add_phone(phone.clone());
        ctx.store.save(&contacts)?;
        return Ok(CmdResult::default().with_message(phone_added_message(
            status,
            &phone,
            name.as_str(),
        )));
    }

    let message = format!("User {} added successfully.", name);
    contacts.insert(
        Contact::new(name)
            .with_phone(phone)
            .with_birthday(birthday)
            .with_address(address)
            .with_email(email),
    );
    ctx.store.save(&contacts)?;
    Ok(CmdResult::success(message))
}

pub fn add_phone<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let phone = Phone::new(args.get(PHONE.key))?;
    let (status, name) = update_contact(ctx.store, args.get(NAME.key), |c| {
        Ok((c.add_phone(phone.clone()), c.name().to_string()))
    })?;
    Ok(CmdResult::default().with_message(phone_added_message(status, &phone, &name)))
}

pub fn change_phone<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let old = Phone::new(args.get(OLD_PHONE.key))?;
    let new = Phone::new(args.get(NEW_PHONE.key))?;
    let name = update_contact(ctx.store, args.get(NAME.key), |c| {
        c.change_phone(&old, new.clone())?;
        Ok(c.name().to_string())
    })?;
    Ok(CmdResult::success(format!(
        "Phone number for user {} changed from {} to {}.",
        name, old, new
    )))
}

pub fn change_birthday<S: DataStore>(
    ctx: &mut Context<'_, S>,
    args: &Args,
) -> Result<CmdResult> {
    let birthday = Birthday::new(args.get(BIRTHDAY.key))?;
    let message = update_contact(ctx.store, args.get(NAME.key), |c| {
        Ok(c.change_birthday(birthday))
    })?;
    Ok(CmdResult::success(message))
}

pub fn change_address<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let address = address_from(args);
    let message = update_contact(ctx.store, args.get(NAME.key), |c| {
        Ok(c.change_address(address))
    })?;
    Ok(CmdResult::success(message))
}

pub fn change_email<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let email = Email::new(args.get(EMAIL.key))?;
    let message = update_contact(ctx.store, args.get(NAME.key), |c| Ok(c.change_email(email)))?;
    Ok(CmdResult::success(message))
}

pub fn delete_user<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let name = Name::new(args.get(NAME.key))?;
    let mut contacts = ctx.store.load::<Contact>()?;
    contacts
        .remove(name.as_str())
        .ok_or_else(|| OstapError::NameNotFound(name.to_string()))?;
    ctx.store.save(&contacts)?;
    Ok(CmdResult::success(format!(
        "User {} deleted successfully.",
        name
    )))
}

pub fn delete_phone<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let phone = Phone::new(args.get(PHONE.key))?;
    let name = update_contact(ctx.store, args.get(NAME.key), |c| {
        c.delete_phone(&phone)?;
        Ok(c.name().to_string())
    })?;
    Ok(CmdResult::success(format!(
        "Phone number {} for user {} deleted successfully.",
        phone, name
    )))
}

pub fn show_phone<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let contact = find_contact(ctx.store, args.get(NAME.key))?;
    let phones = contact
        .phones()
        .iter()
        .map(Phone::as_str)
        .collect::<Vec<_>>()
        .join(", ");
    if phones.is_empty() {
        return Ok(CmdResult::info(format!(
            "There are no phone numbers for user {}.",
            contact.name()
        )));
    }
    Ok(CmdResult::info(format!(
        "Phone numbers for {}: {}.",
        contact.name(),
        phones
    )))
}

pub fn show_address<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let contact = find_contact(ctx.store, args.get(NAME.key))?;
    if contact.address.is_empty() {
        return Ok(CmdResult::info(format!(
            "There is no address for user {}.",
            contact.name()
        )));
    }
    Ok(CmdResult::info(format!(
        "Address for {}: {}.",
        contact.name(),
        contact.address
    )))
}

pub fn show_email<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let contact = find_contact(ctx.store, args.get(NAME.key))?;
    if !contact.email.is_set() {
        return Ok(CmdResult::info(format!(
            "There is no email for user {}.",
            contact.name()
        )));
    }
    Ok(CmdResult::info(format!(
        "Email for {}: {}.",
        contact.name(),
        contact.email
    )))
}

pub fn show_birthday<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let contact = find_contact(ctx.store, args.get(NAME.key))?;
    let days = contact.days_until_birthday(ctx.today)?;
    let message = match days {
        0 => format!("Today is the birthday of {}!", contact.name()),
        1 => format!(
            "Birthday of {}: {}. It is tomorrow.",
            contact.name(),
            contact.birthday
        ),
        n => format!(
            "Birthday of {}: {}. {} days left.",
            contact.name(),
            contact.birthday,
            n
        ),
    };
    Ok(CmdResult::info(message))
}

/// Parses the day window: a positive integer, clamped to [`MAX_BIRTHDAY_WINDOW`].
fn parse_window(raw: &str) -> Result<i64> {
    let days: i64 = raw
        .trim()
        .parse()
        .map_err(|_| OstapError::InvalidNumber(raw.to_string()))?;
    if days <= 0 {
        return Err(OstapError::InvalidNumber(raw.to_string()));
    }
    Ok(days.min(MAX_BIRTHDAY_WINDOW))
}

pub fn show_near_birthdays<S: DataStore>(
    ctx: &mut Context<'_, S>,
    args: &Args,
) -> Result<CmdResult> {
    let days = parse_window(args.get(DAYS.key))?;
    let contacts = ctx.store.load::<Contact>()?;
    let upcoming = contacts.upcoming_birthdays(ctx.today, days);

    if upcoming.is_empty() {
        return Ok(CmdResult::info(format!(
            "There are no birthdays to show within {} day(s).",
            days
        )));
    }

    let mut result = CmdResult::info(format!("Birthdays within {} day(s):", days));
    for (date, name) in upcoming {
        result.add_message(CmdMessage::info(format!(
            "{}: {}",
            date.format(crate::validate::DATE_FORMAT),
            name
        )));
    }
    Ok(result)
}

use super::args::{FOLDER, KIND};
use super::{Args, CmdMessage, CmdResult, Context, Control, Listing};
use crate::error::{OstapError, Result};
use crate::model::{Contact, Note};
use crate::sorter;
use crate::store::DataStore;
use std::path::Path;

pub fn help<S: DataStore>(ctx: &mut Context<'_, S>, _args: &Args) -> Result<CmdResult> {
    Ok(CmdResult::default().with_help(ctx.registry.help_entries()))
}

/// `show all users` or `show all notes`.
pub fn show_all<S: DataStore>(ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let kind = args.required(KIND.key)?.to_lowercase();
    match kind.as_str() {
        "users" | "contacts" => {
            let contacts = ctx.store.load::<Contact>()?;
            if contacts.is_empty() {
                return Ok(CmdResult::info("The address book is empty."));
            }
            Ok(CmdResult::default().with_listing(Listing::Contacts(contacts)))
        }
        "notes" => {
            let notes = ctx.store.load::<Note>()?;
            if notes.is_empty() {
                return Ok(CmdResult::info("The notebook is empty."));
            }
            Ok(CmdResult::default().with_listing(Listing::Notes(notes)))
        }
        _ => Err(OstapError::UnknownField(kind)),
    }
}

pub fn sort_files<S: DataStore>(_ctx: &mut Context<'_, S>, args: &Args) -> Result<CmdResult> {
    let folder = args.required(FOLDER.key)?;
    let path = Path::new(folder);
    if !path.is_dir() {
        return Ok(CmdResult::info(format!(
            "Folder with path {} doesn't exist.",
            folder
        )));
    }
    let report = sorter::sort_folder(path)?;
    let mut result = CmdResult::success(report.summary());
    for archive in &report.broken {
        result.add_message(CmdMessage::warning(format!(
            "Could not unpack {}.",
            archive
        )));
    }
    Ok(result)
}

pub fn clear<S: DataStore>(_ctx: &mut Context<'_, S>, _args: &Args) -> Result<CmdResult> {
    Ok(CmdResult::default().with_control(Control::ClearScreen))
}

pub fn exit<S: DataStore>(_ctx: &mut Context<'_, S>, _args: &Args) -> Result<CmdResult> {
    Ok(CmdResult::info("Good bye!").with_control(Control::Exit))
}

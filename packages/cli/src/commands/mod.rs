mod context;
mod render;

pub mod edit;
pub mod init;
pub mod library;

pub use edit::{
    add_group, edit, generate, remove_group, topic, AddGroupArgs, EditArgs, GenerateArgs,
    RemoveGroupArgs, TopicArgs,
};
pub use init::{init, InitArgs};
pub use library::{delete, list, new, show, types, DeleteArgs, ListArgs, NewArgs, ShowArgs, TypesArgs};

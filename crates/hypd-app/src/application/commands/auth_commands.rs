use chrono::NaiveDate;

use crate::application::commands::command_handler::Command;
use crate::application::dtos::UserDto;
use hypd_domain::streak::LoginKind;

/// Register a new account
#[derive(Debug, Clone)]
pub struct RegisterUserCommand {
    pub username: String,
    pub email: String,
    pub password: String,
}

impl Command for RegisterUserCommand {}

#[derive(Debug, Clone)]
pub struct RegisterUserResult {
    pub access_token: String,
    pub user: UserDto,
}

/// Password login. `today` is the UTC calendar day the streak is credited to.
#[derive(Debug, Clone)]
pub struct LoginCommand {
    pub email: String,
    pub password: String,
    pub today: NaiveDate,
}

impl Command for LoginCommand {}

#[derive(Debug, Clone)]
pub struct LoginResult {
    pub access_token: String,
    pub user: UserDto,
    pub points_earned: u32,
    pub login_kind: LoginKind,
}

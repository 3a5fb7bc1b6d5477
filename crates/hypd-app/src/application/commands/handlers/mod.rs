mod create_game_handler;
mod delete_game_handler;
mod login_handler;
mod record_play_session_handler;
mod register_user_handler;
mod saved_games_handler;
mod set_game_visibility_handler;
mod submit_score_handler;
mod update_settings_handler;


pub use create_game_handler::CreateGameCommandHandler;
pub use delete_game_handler::DeleteGameCommandHandler;
pub use login_handler::LoginCommandHandler;
pub use record_play_session_handler::RecordPlaySessionCommandHandler;
pub use register_user_handler::RegisterUserCommandHandler;
pub use saved_games_handler::SavedGamesCommandHandler;
pub use set_game_visibility_handler::SetGameVisibilityCommandHandler;
pub use submit_score_handler::SubmitScoreCommandHandler;
pub use update_settings_handler::UpdateSettingsCommandHandler;

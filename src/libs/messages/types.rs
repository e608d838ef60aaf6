#[derive(Debug, Clone)]
pub enum Message {
    // === AUTH MESSAGES ===
    SignupSuccess(String), // email
    SigninSuccess(String), // email
    SignoutSuccess,
    SignoutNotifyFailed(String), // error, debug log only
    SignupFailed(String),        // detail
    SigninFailed(String),        // detail
    InvalidCredentials,
    EmailAlreadyRegistered,
    NotAuthenticated(String), // attempted command
    AuthStatusSignedIn,
    AuthStatusSignedOut,

    // === VALIDATION MESSAGES ===
    EmailRequired,
    EmailInvalid,
    PasswordRequired,
    PasswordTooShort(usize),  // minimum length
    PasswordMismatch,
    TitleRequired,
    TitleTooLong(usize),       // maximum length
    DescriptionTooLong(usize), // maximum length

    // === TASK MESSAGES ===
    TaskCreated(String), // title
    TaskUpdated(String), // title
    TaskDeleted(String), // id
    TaskNotFound(String), // id
    TasksNotFound,
    TaskCreateFailed(String), // detail
    TaskUpdateFailed(String), // detail
    TaskDeleteFailed(String), // detail
    TaskFetchFailed(String),  // detail
    NoChangesRequested,
    ConfirmDeleteTask(String), // title
    OperationCancelled,

    // === API MESSAGES ===
    ApiConnectionFailed,
    ApiErrorGeneric,
    ApiValidationError,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigServerSection,

    // === PROMPTS ===
    PromptEmail,
    PromptPassword,
    PromptPasswordConfirm,
    PromptTaskTitle,
    PromptTaskDescription,
    PromptServerApiUrl,
}

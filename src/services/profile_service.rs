use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use rand::Rng;
use regex::Regex;
use validator::Validate;

use crate::{
    auth::password::{hash_password, to_hex},
    errors::{AppError, AppResult},
    mailer::ResetCodeMailer,
    models::dto::{
        request::{ConfirmResetRequest, LinkResetRequest, UpdateProfileRequest, ValidateCodeRequest},
        response::{ProfileResponse, ProfileUpdateResponse},
    },
    repositories::{ResetTokenRepository, UserRepository},
};

static RESET_CODE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{6}$").unwrap());

const RESET_TOKEN_TTL_SECS: i64 = 60 * 60;
const MIN_PASSWORD_LEN: usize = 8;

pub struct ProfileService {
    users: Arc<dyn UserRepository>,
    reset_tokens: Arc<dyn ResetTokenRepository>,
    mailer: Arc<dyn ResetCodeMailer>,
}

impl ProfileService {
    pub fn new(
        users: Arc<dyn UserRepository>,
        reset_tokens: Arc<dyn ResetTokenRepository>,
        mailer: Arc<dyn ResetCodeMailer>,
    ) -> Self {
        Self {
            users,
            reset_tokens,
            mailer,
        }
    }

    pub async fn profile(&self, user_id: i64) -> AppResult<ProfileResponse> {
        let user = self
            .users
            .find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".into()))?;
        Ok(ProfileResponse { user })
    }

    pub async fn update_profile(
        &self,
        user_id: i64,
        req: UpdateProfileRequest,
    ) -> AppResult<ProfileUpdateResponse> {
        req.validate()?;

        if self.users.email_taken_by_other(&req.email, user_id).await? {
            return Err(AppError::BadRequest("Este email já está em uso".into()));
        }

        self.users
            .update_profile(user_id, &req.name, &req.email, req.phone_number.as_deref())
            .await?;

        let user = self
            .users
            .find_profile(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".into()))?;

        Ok(ProfileUpdateResponse {
            message: "Perfil atualizado com sucesso".into(),
            user,
        })
    }

    /// Issues a fresh 6-digit code plus a link hash, replaces any previous
    /// token for the user and mails the code. Valid for one hour.
    pub async fn request_reset(&self, user_id: i64) -> AppResult<String> {
        let user = self
            .users
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuário não encontrado".into()))?;

        let (code, hash_url) = {
            let mut rng = rand::thread_rng();
            let code = rng.gen_range(100_000..=999_999).to_string();
            let mut bytes = [0u8; 20];
            rng.fill(&mut bytes[..]);
            (code, to_hex(&bytes))
        };
        let expires_at = Utc::now().timestamp() + RESET_TOKEN_TTL_SECS;

        self.reset_tokens
            .rotate(user_id, &code, &hash_url, expires_at)
            .await?;

        self.mailer
            .send_reset_code(&user.email, &user.name, &code)
            .await?;

        Ok("Código de redefinição de senha enviado para seu email".into())
    }

    /// Authenticated confirmation: the code must match the session user's
    /// live token.
    pub async fn confirm_reset(&self, user_id: i64, req: ConfirmResetRequest) -> AppResult<String> {
        if !RESET_CODE_RE.is_match(&req.token) {
            return Err(AppError::BadRequest("Formato de token inválido".into()));
        }
        if req.new_password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(
                "A senha deve ter pelo menos 8 caracteres".into(),
            ));
        }

        let now = Utc::now().timestamp();
        let token = self
            .reset_tokens
            .find_valid_for_user(user_id, now)
            .await?
            .filter(|t| t.token == req.token)
            .ok_or_else(|| {
                AppError::BadRequest(
                    "Token inválido ou expirado. Solicite um novo código de redefinição.".into(),
                )
            })?;

        self.reset_tokens
            .consume(token.user_id, &hash_password(&req.new_password))
            .await?;

        Ok("Senha atualizada com sucesso".into())
    }

    /// Unauthenticated reset through the mailed link.
    pub async fn link_reset(&self, req: LinkResetRequest) -> AppResult<String> {
        if !RESET_CODE_RE.is_match(&req.token) {
            return Err(AppError::BadRequest("Formato de token inválido".into()));
        }
        if req.password.len() < MIN_PASSWORD_LEN {
            return Err(AppError::BadRequest(
                "A senha deve ter pelo menos 8 caracteres".into(),
            ));
        }

        let now = Utc::now().timestamp();
        let token = self
            .reset_tokens
            .find_valid_by_hash_and_token(&req.hash, &req.token, now)
            .await?
            .ok_or_else(|| AppError::BadRequest("Link ou código inválido ou expirado".into()))?;

        self.reset_tokens
            .consume(token.user_id, &hash_password(&req.password))
            .await?;

        Ok("Senha definida com sucesso! Você já pode fazer login.".into())
    }

    pub async fn validate_hash(&self, hash: &str) -> AppResult<String> {
        let now = Utc::now().timestamp();
        self.reset_tokens
            .find_valid_by_hash(hash, now)
            .await?
            .ok_or_else(|| AppError::NotFound("Link inválido ou expirado".into()))?;
        Ok("Hash válido".into())
    }

    pub async fn validate_code(&self, req: ValidateCodeRequest) -> AppResult<String> {
        if !RESET_CODE_RE.is_match(&req.token) {
            return Err(AppError::BadRequest("Formato de token inválido".into()));
        }

        let now = Utc::now().timestamp();
        self.reset_tokens
            .find_valid_by_hash_and_token(&req.hash, &req.token, now)
            .await?
            .ok_or_else(|| AppError::BadRequest("Código inválido ou expirado".into()))?;
        Ok("Código validado com sucesso".into())
    }
}

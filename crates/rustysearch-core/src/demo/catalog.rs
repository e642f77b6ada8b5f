//! Canned results for each keyword bucket.
//!
//! Each table is authored in descending score order.

use super::types::{KeywordBucket, ResultEntry};

const AUTHENTICATION: [ResultEntry; 3] = [
    ResultEntry {
        file_path: "src/auth/service.go",
        line_number: 42,
        score: 0.92,
        snippet: "func (s *AuthService) Authenticate(credentials *model.Credentials) (*model.User, error) {",
        description: "Core authentication logic that validates user credentials against the database",
    },
    ResultEntry {
        file_path: "src/auth/controller.go",
        line_number: 28,
        score: 0.87,
        snippet: "func (c *AuthController) Login(w http.ResponseWriter, r *http.Request) {",
        description: "REST API endpoint handler for user login requests",
    },
    ResultEntry {
        file_path: "src/middleware/jwt.go",
        line_number: 15,
        score: 0.83,
        snippet: "func GenerateToken(user *model.User) (string, error) {",
        description: "JWT token generation for authenticated users",
    },
];

const DATABASE: [ResultEntry; 3] = [
    ResultEntry {
        file_path: "src/infrastructure/database.go",
        line_number: 23,
        score: 0.94,
        snippet: "func NewDatabaseConnection(config *Config) (*Database, error) {",
        description: "Establishes database connections with configuration parameters",
    },
    ResultEntry {
        file_path: "src/config/database_config.go",
        line_number: 12,
        score: 0.85,
        snippet: "type DatabaseConfig struct {",
        description: "Configuration structure for database connection settings",
    },
    ResultEntry {
        file_path: "src/models/repository.go",
        line_number: 31,
        score: 0.78,
        snippet: "func (r *Repository) Connect() error {",
        description: "Generic repository pattern implementation for database access",
    },
];

const API: [ResultEntry; 3] = [
    ResultEntry {
        file_path: "src/api/router.go",
        line_number: 45,
        score: 0.91,
        snippet: "func RegisterRoutes(e *echo.Echo, controllers *Controllers) {",
        description: "Main router configuration that registers all API endpoints",
    },
    ResultEntry {
        file_path: "src/api/middleware.go",
        line_number: 28,
        score: 0.84,
        snippet: "func AuthMiddleware() echo.MiddlewareFunc {",
        description: "Authentication middleware for protecting API endpoints",
    },
    ResultEntry {
        file_path: "src/controllers/user_controller.go",
        line_number: 57,
        score: 0.79,
        snippet:
            "func (c *UserController) GetUserProfile(w http.ResponseWriter, r *http.Request) {",
        description: "API handler for retrieving user profile information",
    },
];

const GENERAL: [ResultEntry; 3] = [
    ResultEntry {
        file_path: "src/main.go",
        line_number: 28,
        score: 0.75,
        snippet: "func main() {",
        description: "Application entry point that initializes all components",
    },
    ResultEntry {
        file_path: "src/utils/logger.go",
        line_number: 42,
        score: 0.65,
        snippet: "func NewLogger(config *LogConfig) *Logger {",
        description: "Configurable logging utility for application-wide use",
    },
    ResultEntry {
        file_path: "src/models/user.go",
        line_number: 15,
        score: 0.60,
        snippet: "type User struct {",
        description: "Core user data model with all user properties",
    },
];

/// Authored entries for `bucket`, in authoring order.
pub fn entries(bucket: KeywordBucket) -> &'static [ResultEntry] {
    match bucket {
        KeywordBucket::Authentication => &AUTHENTICATION,
        KeywordBucket::Database => &DATABASE,
        KeywordBucket::Api => &API,
        KeywordBucket::General => &GENERAL,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [KeywordBucket; 4] = [
        KeywordBucket::Authentication,
        KeywordBucket::Database,
        KeywordBucket::Api,
        KeywordBucket::General,
    ];

    #[test]
    fn test_every_bucket_has_three_entries() {
        for bucket in ALL {
            assert_eq!(entries(bucket).len(), 3, "bucket {}", bucket);
        }
    }

    #[test]
    fn test_tables_authored_in_descending_score() {
        for bucket in ALL {
            let scores: Vec<f32> = entries(bucket).iter().map(|e| e.score).collect();
            assert!(
                scores.windows(2).all(|w| w[0] >= w[1]),
                "bucket {} not descending: {:?}",
                bucket,
                scores
            );
        }
    }

    #[test]
    fn test_scores_within_unit_interval() {
        for bucket in ALL {
            for entry in entries(bucket) {
                assert!((0.0..=1.0).contains(&entry.score), "{:?}", entry);
            }
        }
    }
}

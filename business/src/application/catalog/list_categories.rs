use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::use_cases::list_categories::ListCategoriesUseCase;
use crate::domain::logger::Logger;
use crate::domain::product::model::Category;
use crate::domain::product::repository::CategoryRepository;

pub struct ListCategoriesUseCaseImpl {
    pub repository: Arc<dyn CategoryRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ListCategoriesUseCase for ListCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CatalogError> {
        let categories = self.repository.get_all().await?;
        Ok(categories)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use mockall::mock;
    use uuid::Uuid;

    mock! {
        pub CategoryRepo {}

        #[async_trait]
        impl CategoryRepository for CategoryRepo {
            async fn get_all(&self) -> Result<Vec<Category>, RepositoryError>;
            async fn get_by_slug(&self, slug: &str) -> Result<Category, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    #[tokio::test]
    async fn should_list_all_categories() {
        let mut repo = MockCategoryRepo::new();
        repo.expect_get_all().returning(|| {
            Ok(vec![Category::from_repository(
                Uuid::new_v4(),
                "Brewing".to_string(),
                "brewing".to_string(),
            )])
        });
        let mut logger = MockLog::new();
        logger.expect_debug().returning(|_| ());

        let use_case = ListCategoriesUseCaseImpl {
            repository: Arc::new(repo),
            logger: Arc::new(logger),
        };

        let categories = use_case.execute().await.unwrap();
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].slug, "brewing");
    }
}

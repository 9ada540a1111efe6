use async_trait::async_trait;
use futures::TryStreamExt;
use mongodb::{
    bson::{doc, to_bson},
    options::{FindOneAndUpdateOptions, FindOptions, IndexOptions, ReturnDocument},
    Collection, IndexModel,
};
use serde::Deserialize;

use crate::{
    db::Database,
    errors::{AppError, AppResult},
    models::domain::{NewQuiz, Quiz},
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait QuizRepository: Send + Sync {
    /// All quizzes, ordered by id.
    async fn list_all(&self) -> AppResult<Vec<Quiz>>;
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>>;
    /// Stores a new quiz under the next free id.
    async fn create(&self, quiz: NewQuiz) -> AppResult<Quiz>;
    /// Inserts records with their own ids and returns how many were written.
    async fn bulk_seed(&self, quizzes: Vec<Quiz>) -> AppResult<usize>;
    /// Replaces question and answer. Fails with `NotFound` instead of inserting.
    async fn update(&self, id: i64, quiz: NewQuiz) -> AppResult<Quiz>;
    async fn delete(&self, id: i64) -> AppResult<()>;
}

const COUNTERS_COLLECTION: &str = "counters";

#[derive(Debug, Deserialize)]
struct IdCounter {
    seq: i64,
}

pub struct MongoQuizRepository {
    collection: Collection<Quiz>,
    counters: Collection<IdCounter>,
    counter_key: String,
}

impl MongoQuizRepository {
    pub fn new(db: &Database, collection_name: &str) -> Self {
        let collection = db.get_collection(collection_name);
        let counters = db.get_collection(COUNTERS_COLLECTION);
        Self {
            collection,
            counters,
            counter_key: collection_name.to_string(),
        }
    }

    pub async fn ensure_indexes(&self) -> AppResult<()> {
        log::info!("Creating indexes for quizzes collection");

        let id_index = IndexModel::builder()
            .keys(doc! { "id": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("id_unique".to_string())
                    .build(),
            )
            .build();

        self.collection.create_index(id_index).await?;

        log::info!("Successfully created indexes for quizzes collection");
        Ok(())
    }

    /// Bumps the counter and returns the new value. The counter only moves
    /// forward, so ids freed by a delete are never handed out again.
    async fn next_id(&self) -> AppResult<i64> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters
            .find_one_and_update(
                doc! { "_id": &self.counter_key },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::DatabaseError("Id counter was not created".to_string()))?;

        Ok(counter.seq)
    }

    async fn raise_counter_to(&self, id: i64) -> AppResult<()> {
        let options = FindOneAndUpdateOptions::builder().upsert(true).build();
        self.counters
            .find_one_and_update(
                doc! { "_id": &self.counter_key },
                doc! { "$max": { "seq": id } },
            )
            .with_options(options)
            .await?;
        Ok(())
    }
}

#[async_trait]
impl QuizRepository for MongoQuizRepository {
    async fn list_all(&self) -> AppResult<Vec<Quiz>> {
        let find_options = FindOptions::builder().sort(doc! { "id": 1 }).build();

        let cursor = self.collection.find(doc! {}).with_options(find_options).await?;
        let quizzes: Vec<Quiz> = cursor.try_collect().await?;
        Ok(quizzes)
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Quiz>> {
        let quiz = self.collection.find_one(doc! { "id": id }).await?;
        Ok(quiz)
    }

    async fn create(&self, quiz: NewQuiz) -> AppResult<Quiz> {
        let id = self.next_id().await?;
        let quiz = Quiz::with_id(id, quiz);
        self.collection.insert_one(&quiz).await?;
        Ok(quiz)
    }

    async fn bulk_seed(&self, quizzes: Vec<Quiz>) -> AppResult<usize> {
        let Some(max_id) = quizzes.iter().map(|q| q.id).max() else {
            return Ok(0);
        };

        // The counter moves first so it never trails a stored id, even when
        // the insert below fails halfway.
        self.raise_counter_to(max_id).await?;
        let result = self.collection.insert_many(&quizzes).await?;

        log::info!("Seeded {} quizzes", result.inserted_ids.len());
        Ok(result.inserted_ids.len())
    }

    async fn update(&self, id: i64, quiz: NewQuiz) -> AppResult<Quiz> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(false)
            .return_document(ReturnDocument::After)
            .build();

        let updated_at = to_bson(&chrono::Utc::now())?;
        let update = doc! {
            "$set": {
                "question": quiz.question(),
                "answer": quiz.answer(),
                "updated_at": updated_at,
            }
        };

        self.collection
            .find_one_and_update(doc! { "id": id }, update)
            .with_options(options)
            .await?
            .ok_or_else(|| AppError::quiz_not_found(id))
    }

    async fn delete(&self, id: i64) -> AppResult<()> {
        let result = self.collection.delete_one(doc! { "id": id }).await?;

        if result.deleted_count == 0 {
            return Err(AppError::quiz_not_found(id));
        }

        Ok(())
    }
}

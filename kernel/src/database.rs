use crate::KernelError;

#[async_trait::async_trait]
pub trait DatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    async fn transact(&self) -> error_stack::Result<Connection, KernelError>;
}

pub trait DependOnDatabaseConnection<Connection: Transaction>: 'static + Sync + Send {
    type DatabaseConnection: DatabaseConnection<Connection>;
    fn database_connection(&self) -> &Self::DatabaseConnection;
}

#[async_trait::async_trait]
pub trait Transaction: 'static + Send {
    async fn commit(self) -> error_stack::Result<(), KernelError>;
    async fn roll_back(self) -> error_stack::Result<(), KernelError>;
}

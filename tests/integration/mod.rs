/// Integration tests exercising the tracker end to end over SQLite
mod tracker_workflow;

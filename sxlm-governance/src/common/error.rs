use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// The required principal did not authenticate
    NotAuthorized = 1,

    /// Proposer holds less sXLM than the proposal stake
    InsufficientStakeToPropose = 2,

    /// This account already voted on this proposal
    AlreadyVoted = 3,

    /// Voting window has ended
    VotingClosed = 4,

    /// Voting window is still open
    VotingOpen = 5,

    /// Participation fell short of the quorum
    QuorumNotMet = 6,

    /// Proposal was already executed
    AlreadyExecuted = 7,

    /// No proposal under this id
    ProposalNotFound = 8,

    /// Contract is not initialized
    NotInitialized = 9,

    /// Contract is already initialized
    AlreadyInitialized = 10,

    /// Votes against outweigh votes for
    RejectedProposal = 11,

    /// Parameter outside its valid range
    InvalidParameter = 12,

    /// Arithmetic overflow or underflow occurred
    ArithmeticOverflow = 13,
}
